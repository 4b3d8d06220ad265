use crate::articles::Article;

/// Result of an interactive search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// `true` when the user confirmed a selection with Enter.
	pub accepted: bool,
	/// Query text at the moment the session ended.
	pub query: String,
	pub selection: Option<Article>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: impl Into<String>, selection: Option<Article>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection,
		}
	}
}
