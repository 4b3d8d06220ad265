//! Core state container for the search page.
//!
//! [`App`] owns the query input and the derived [`ResultsView`]. Every change
//! to the query goes through [`App::recompute`], which rebuilds the visible
//! results before the next frame is drawn.

use log::{debug, info};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::articles::Article;
use crate::results::ResultsView;
use crate::ui::config::UiLabels;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Number of entries skipped by PageUp/PageDown.
pub(crate) const PAGE_STEP: usize = 5;

/// State shared across the terminal UI.
pub struct App<'a> {
	articles: &'a [Article],
	pub query_input: QueryInput<'a>,
	pub(crate) results: ResultsView<'a>,
	pub(crate) list_state: ListState,
	pub(crate) labels: UiLabels,
	pub theme: Theme,
	/// Screen area of the clear control from the last frame, if it was drawn.
	pub(crate) clear_area: Option<Rect>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] with an empty query.
	pub fn new(articles: &'a [Article]) -> Self {
		Self::with_query(articles, "")
	}

	/// Construct an [`App`] with a pre-filled query.
	pub fn with_query(articles: &'a [Article], query: &str) -> Self {
		let mut app = Self {
			articles,
			query_input: QueryInput::new(query),
			results: ResultsView::compute(articles, ""),
			list_state: ListState::default(),
			labels: UiLabels::default(),
			theme: Theme::default(),
			clear_area: None,
		};
		app.apply_input_appearance();
		app.recompute();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_appearance();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
		self.apply_input_appearance();
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.query_input.text()
	}

	#[must_use]
	pub fn results(&self) -> &ResultsView<'a> {
		&self.results
	}

	/// Index of the selected entry within the visible results.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.list_state.selected()
	}

	/// Rebuild derived results from the current query.
	pub(crate) fn recompute(&mut self) {
		self.results = ResultsView::compute(self.articles, self.query_input.text());
		self.list_state.select(if self.results.is_empty() { None } else { Some(0) });
		*self.list_state.offset_mut() = 0;
	}

	/// Reset the query to empty and show the full catalog again.
	///
	/// Returns `false` when the query was already empty.
	pub fn clear_query(&mut self) -> bool {
		if !self.query_input.clear() {
			return false;
		}
		info!("query cleared");
		self.recompute();
		true
	}

	/// The article behind the current selection.
	pub(crate) fn current_selection(&self) -> Option<Article> {
		let index = self.list_state.selected()?;
		self.results.get(index).map(|entry| *entry.article)
	}

	/// Move the selection by `delta` entries, clamping at both ends.
	pub(crate) fn move_selection(&mut self, delta: isize) {
		let len = self.results.len();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let current = self.list_state.selected().unwrap_or(0);
		let target = current.saturating_add_signed(delta).min(len - 1);
		debug!("selection moved from {current} to {target}");
		self.list_state.select(Some(target));
	}

	fn apply_input_appearance(&mut self) {
		self.query_input
			.set_appearance(&self.labels.placeholder, self.theme.input, self.theme.placeholder);
	}
}
