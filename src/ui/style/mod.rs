//! Visual styling utilities.
//!
//! Themes carry the colour scheme for every element of the search page,
//! including the background used to mark matched text.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};
