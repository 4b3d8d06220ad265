//! UI building blocks shared across rendering and state modules.

/// Prompt, query input and clear control.
pub mod prompt;
/// Result list construction and rendering.
pub mod results;

pub use prompt::{InputContext, render_input};
pub use results::{ResultsContext, build_result_items, render_results};
