use log::warn;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A contiguous slice of the input text and whether it belongs to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan<'a> {
	pub text: &'a str,
	pub matched: bool,
}

impl<'a> HighlightSpan<'a> {
	#[must_use]
	pub fn plain(text: &'a str) -> Self {
		Self {
			text,
			matched: false,
		}
	}

	#[must_use]
	pub fn matched(text: &'a str) -> Self {
		Self {
			text,
			matched: true,
		}
	}
}

/// Escape every regex metacharacter so the query only matches itself.
#[must_use]
pub fn escape_literal(query: &str) -> String {
	regex::escape(query)
}

/// Case-insensitive literal matcher compiled once per query.
///
/// Case is folded with Unicode simple case folding, the same rule
/// [`filter`](crate::search::filter) applies when deciding visibility.
///
/// A render pass highlights the title and body of every visible article with
/// the same query, so the pattern is built up front and reused.
#[derive(Debug, Clone)]
pub struct Highlighter {
	pattern: Option<Regex>,
}

impl Highlighter {
	/// Build a highlighter for `query`.
	///
	/// Whitespace-only queries highlight nothing. Otherwise the query is used
	/// as typed, surrounding whitespace included.
	#[must_use]
	pub fn new(query: &str) -> Self {
		if query.trim().is_empty() {
			return Self::disabled();
		}

		let escaped = escape_literal(query);
		match RegexBuilder::new(&escaped).case_insensitive(true).build() {
			Ok(pattern) => Self {
				pattern: Some(pattern),
			},
			Err(err) => {
				warn!("highlighting disabled for query of {} bytes: {err}", query.len());
				Self::disabled()
			}
		}
	}

	/// A highlighter that never marks anything.
	#[must_use]
	pub fn disabled() -> Self {
		Self { pattern: None }
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.pattern.is_some()
	}

	/// Whether `text` contains at least one occurrence of the query.
	#[must_use]
	pub fn is_match(&self, text: &str) -> bool {
		self.pattern.as_ref().is_some_and(|pattern| pattern.is_match(text))
	}

	/// Partition `text` into alternating plain and matched spans.
	///
	/// The span texts concatenate back to `text`. Adjacent matches stay
	/// separate spans and no empty plain span is emitted between them. Text
	/// without any match comes back as a single plain span.
	#[must_use]
	pub fn spans<'t>(&self, text: &'t str) -> Vec<HighlightSpan<'t>> {
		let Some(pattern) = &self.pattern else {
			return vec![HighlightSpan::plain(text)];
		};

		let mut spans = Vec::new();
		let mut cursor = 0;
		for found in pattern.find_iter(text) {
			if found.start() > cursor {
				spans.push(HighlightSpan::plain(&text[cursor..found.start()]));
			}
			spans.push(HighlightSpan::matched(found.as_str()));
			cursor = found.end();
		}

		if cursor < text.len() || spans.is_empty() {
			spans.push(HighlightSpan::plain(&text[cursor..]));
		}

		spans
	}
}

/// Highlight every case-insensitive, literal occurrence of `query` in `text`.
#[must_use]
pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<HighlightSpan<'t>> {
	Highlighter::new(query).spans(text)
}
