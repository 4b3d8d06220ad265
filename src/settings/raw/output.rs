use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{CliArgs, Markers};

/// Plain-output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) mark_open: Option<String>,
	pub(super) mark_close: Option<String>,
}

impl OutputSection {
	pub(super) fn finalize(self) -> Markers {
		let defaults = Markers::default();
		Markers {
			open: self.mark_open.unwrap_or(defaults.open),
			close: self.mark_close.unwrap_or(defaults.close),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) dir: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}
}
