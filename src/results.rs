//! Derived result state for a single query.
//!
//! [`ResultsView::compute`] runs the matcher once and the highlighter over the
//! title and body of every visible article. The view is rebuilt whenever the
//! query changes and is otherwise reused between frames.

use log::debug;
use serde::Serialize;

use crate::articles::Article;
use crate::search::{HighlightSpan, Highlighter, filter};

/// One visible article with its highlighted fields.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEntry<'a> {
	pub id: u32,
	#[serde(skip)]
	pub article: &'a Article,
	pub date: String,
	pub title: Vec<HighlightSpan<'a>>,
	pub body: Vec<HighlightSpan<'a>>,
}

/// Filtered and highlighted articles for a query.
#[derive(Debug, Clone)]
pub struct ResultsView<'a> {
	query: String,
	entries: Vec<ResultEntry<'a>>,
}

impl<'a> ResultsView<'a> {
	/// Recompute the visible results for `query`.
	#[must_use]
	pub fn compute(articles: &'a [Article], query: &str) -> Self {
		let highlighter = Highlighter::new(query);
		let entries: Vec<ResultEntry<'a>> = filter(articles, query)
			.into_iter()
			.map(|article| ResultEntry {
				id: article.id,
				article,
				date: article.date_label(),
				title: highlighter.spans(article.title),
				body: highlighter.spans(article.body),
			})
			.collect();
		debug!(
			"recomputed results: {} of {} articles visible (query {} chars)",
			entries.len(),
			articles.len(),
			query.chars().count()
		);
		Self {
			query: query.to_string(),
			entries,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn entries(&self) -> &[ResultEntry<'a>] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&ResultEntry<'a>> {
		self.entries.get(index)
	}

	/// The pluralised count shown above the list, e.g. `3 posts`.
	#[must_use]
	pub fn count_label(&self) -> String {
		count_label(self.len())
	}

	/// The full count sentence, e.g. `3 posts were found`.
	#[must_use]
	pub fn count_message(&self) -> String {
		count_message(self.len())
	}
}

/// `1 post` for exactly one result, `N posts` otherwise.
#[must_use]
pub fn count_label(count: usize) -> String {
	let noun = if count == 1 { "post" } else { "posts" };
	format!("{count} {noun}")
}

#[must_use]
pub fn count_message(count: usize) -> String {
	format!("{} were found", count_label(count))
}
