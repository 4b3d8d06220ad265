//! Query matching over the article catalog.
//!
//! [`matcher`] decides which articles are visible for a query and
//! [`highlight`] partitions text into plain and matched spans for display.
//! Both are pure functions of their inputs.

pub mod highlight;
pub mod matcher;

pub use highlight::{HighlightSpan, Highlighter, escape_literal, highlight};
pub use matcher::{filter, normalize_query};
