use anyhow::{Result, bail};
use log::warn;

use super::App;
use crate::articles::{ARTICLES, Article};
use crate::outcome::SearchOutcome;
use crate::ui::config::UiLabels;
use crate::ui::style::{self, Theme};

/// Builder for the interactive search page.
///
/// Collects the initial query, labels and theme before handing them to an
/// [`App`] and running the terminal loop.
pub struct SearchPage<'a> {
	articles: &'a [Article],
	initial_query: String,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
}

impl Default for SearchPage<'static> {
	fn default() -> Self {
		Self::new(&ARTICLES)
	}
}

impl<'a> SearchPage<'a> {
	/// Create a search page over `articles`.
	pub fn new(articles: &'a [Article]) -> Self {
		Self {
			articles,
			initial_query: String::new(),
			labels: None,
			theme: None,
		}
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Select a registered theme by name. Unknown names keep the current
	/// theme and are logged.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!("unknown theme {name:?}; keeping the default"),
		}
		self
	}

	/// Select a registered theme by name, failing on unknown names.
	pub fn try_theme_name(self, name: &str) -> Result<Self> {
		let Some(theme) = style::by_name(name) else {
			bail!(
				"unknown theme {name:?}; available themes: {}",
				style::names().join(", ")
			);
		};
		Ok(self.with_theme(theme))
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the [`App`] without starting the terminal loop.
	pub fn into_app(self) -> App<'a> {
		let mut app = App::with_query(self.articles, &self.initial_query);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive search page with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.into_app().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_applies_query_and_labels() {
		let labels = UiLabels {
			heading: "Posts".to_string(),
			..UiLabels::default()
		};
		let app = SearchPage::default()
			.with_initial_query("grid")
			.with_labels(labels.clone())
			.into_app();

		assert_eq!(app.query(), "grid");
		assert_eq!(app.results().len(), 3);
		assert_eq!(app.labels, labels);
	}

	#[test]
	fn theme_names_resolve_through_registry() {
		let paper = style::by_name("paper").expect("paper theme registered");
		let app = SearchPage::default().with_theme_name("light").into_app();
		assert_eq!(app.theme, paper);
	}

	#[test]
	fn unknown_theme_names_are_rejected_or_ignored() {
		assert!(SearchPage::default().try_theme_name("no-such-theme").is_err());
		let app = SearchPage::default().with_theme_name("no-such-theme").into_app();
		assert_eq!(app.theme, Theme::default());
	}
}
