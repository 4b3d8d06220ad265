use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod output;
mod ui;

use output::{LogSection, OutputSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	output: OutputSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"POSTSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			clear_label: detect_source(
				false,
				self.ui.clear_label.is_some(),
				"POSTSEARCH__UI__CLEAR_LABEL",
				"",
				"ui.clear_label",
			),
			mark_open: detect_source(
				false,
				self.output.mark_open.is_some(),
				"POSTSEARCH__OUTPUT__MARK_OPEN",
				"",
				"output.mark_open",
			),
			mark_close: detect_source(
				false,
				self.output.mark_close.is_some(),
				"POSTSEARCH__OUTPUT__MARK_CLOSE",
				"",
				"output.mark_close",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"POSTSEARCH__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			labels: ui.labels,
			initial_query: ui.initial_query,
			theme: ui.theme,
			markers: self.output.finalize(),
			log_level: self.log.level.unwrap_or_else(|| postsearch::logging::DEFAULT_LEVEL.to_string()),
			log_dir: self.log.dir,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
