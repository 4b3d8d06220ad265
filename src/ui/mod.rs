//! Interactive terminal rendition of the search page.
//!
//! The [`builder`] module exposes the public-facing [`SearchPage`] builder. The
//! remaining submodules implement the event loop, rendering, state management
//! and the widgets and styles used to draw the page.

mod actions;
mod builder;
pub mod components;
pub mod config;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;
pub mod wrap;

pub use builder::SearchPage;
pub use config::UiLabels;
pub use runtime::run;
pub use state::App;
