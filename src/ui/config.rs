/// Text shown around the search box and result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Page heading above the input.
	pub heading: String,
	/// Label naming the searched collection, rendered as the prompt.
	pub input_label: String,
	/// Placeholder shown while the query is empty.
	pub placeholder: String,
	/// Clear-query control, shown only while the query is non-empty.
	pub clear_label: String,
	/// Key help rendered in the footer.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			heading: "Search".to_string(),
			input_label: "articles".to_string(),
			placeholder: "Search articles...".to_string(),
			clear_label: "x".to_string(),
			hint: "↑/↓ select · Enter open · Ctrl+U clear · Esc clear/quit".to_string(),
		}
	}
}
