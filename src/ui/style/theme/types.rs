use ratatui::style::Style;

/// Styles for every element of the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Page heading above the search box.
	pub heading: Style,
	/// Prompt label in front of the input.
	pub prompt: Style,
	/// The query text itself.
	pub input: Style,
	/// Placeholder shown while the query is empty.
	pub placeholder: Style,
	/// Clear-query control at the end of the input row.
	pub clear: Style,
	/// Result count line.
	pub count: Style,
	/// Article titles.
	pub title: Style,
	/// Publication dates.
	pub date: Style,
	/// Article bodies.
	pub body: Style,
	/// Background of the selected result.
	pub selected: Style,
	/// Footer hints.
	pub muted: Style,
	/// Matched text inside titles and bodies.
	pub highlight: Style,
}

/// A built-in theme together with the names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
