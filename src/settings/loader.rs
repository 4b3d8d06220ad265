use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::TempDir;

	use super::*;

	fn write_config(dir: &TempDir, name: &str, contents: &str) -> String {
		let path = dir.path().join(name);
		fs::write(&path, contents).expect("write config");
		path.display().to_string()
	}

	#[test]
	fn explicit_config_file_is_applied() {
		let dir = TempDir::new().expect("temp dir");
		let path = write_config(
			&dir,
			"custom.toml",
			r#"
[ui]
heading = "Blog"
initial_query = "grid"
theme = "paper"

[output]
mark_open = "["
mark_close = "]"
"#,
		);
		let cli = CliArgs::parse_from(["postsearch", "--no-config", "--config", &path]);
		let config = load(&cli).expect("load config");

		assert_eq!(config.labels.heading, "Blog");
		assert_eq!(config.initial_query, "grid");
		assert_eq!(config.theme.as_deref(), Some("paper"));
		assert_eq!(config.markers.open, "[");
		assert_eq!(config.markers.close, "]");
	}

	#[test]
	fn cli_flags_beat_file_values() {
		let dir = TempDir::new().expect("temp dir");
		let path = write_config(&dir, "custom.toml", "[ui]\ninitial_query = \"grid\"\n");
		let cli = CliArgs::parse_from([
			"postsearch",
			"--no-config",
			"--config",
			&path,
			"--query",
			"flexbox",
		]);
		let config = load(&cli).expect("load config");
		assert_eq!(config.initial_query, "flexbox");
	}

	#[test]
	fn later_files_override_earlier_ones() {
		let dir = TempDir::new().expect("temp dir");
		let first = write_config(&dir, "first.toml", "[ui]\nheading = \"One\"\nplaceholder = \"Find...\"\n");
		let second = write_config(&dir, "second.toml", "[ui]\nheading = \"Two\"\n");
		let cli = CliArgs::parse_from(["postsearch", "-n", "-c", &first, "-c", &second]);
		let config = load(&cli).expect("load config");
		assert_eq!(config.labels.heading, "Two");
		assert_eq!(config.labels.placeholder, "Find...");
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let dir = TempDir::new().expect("temp dir");
		let path = dir.path().join("absent.toml").display().to_string();
		let cli = CliArgs::parse_from(["postsearch", "-n", "-c", &path]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn empty_marker_in_file_is_rejected() {
		let dir = TempDir::new().expect("temp dir");
		let path = write_config(&dir, "bad.toml", "[output]\nmark_open = \"\"\n");
		let cli = CliArgs::parse_from(["postsearch", "-n", "-c", &path]);
		let err = load(&cli).expect_err("empty marker should be rejected");
		assert!(err.to_string().contains("output.mark_open"));
	}

	#[test]
	fn blank_clear_label_in_file_is_rejected() {
		let dir = TempDir::new().expect("temp dir");
		let path = write_config(&dir, "bad.toml", "[ui]\nclear_label = \"\"\n");
		let cli = CliArgs::parse_from(["postsearch", "-n", "-c", &path]);
		let err = load(&cli).expect_err("blank clear label should be rejected");
		assert!(err.to_string().contains("ui.clear_label"));
	}
}
