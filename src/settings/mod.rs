//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files and environment
//! variables, applies CLI overrides, validates the result and returns a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
