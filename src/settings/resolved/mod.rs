use std::path::PathBuf;

use postsearch::UiLabels;

use crate::cli::Markers;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub labels: UiLabels,
	pub initial_query: String,
	pub theme: Option<String>,
	pub(crate) markers: Markers,
	pub log_level: String,
	/// Log directory; `None` means `<data dir>/logs`.
	pub log_dir: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
