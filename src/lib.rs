//! Core crate exports for the `postsearch` article search page.
//!
//! The root module re-exports the matcher, highlighter and UI entry points so
//! embedders can filter, highlight or run the interactive page without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod articles;
pub mod logging;
pub mod outcome;
pub mod results;
pub mod search;
pub mod ui;

pub use articles::{ARTICLES, Article, format_date};
pub use outcome::SearchOutcome;
pub use results::{ResultEntry, ResultsView, count_label, count_message};
pub use search::{HighlightSpan, Highlighter, filter, highlight, normalize_query};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchPage, UiLabels, run};
