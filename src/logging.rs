//! File logging bootstrap.
//!
//! The terminal is owned by the UI while the search page runs, so log records
//! go to rolling files under the data directory instead of stderr.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::app_dirs;

const LOG_FILE_BASENAME: &str = "postsearch";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Level used when nothing is configured.
pub const DEFAULT_LEVEL: &str = "info";

static LOGGER: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
	level: &'static str,
	dir: PathBuf,
	_handle: LoggerHandle,
}

/// Start file logging at `level` in `dir`.
///
/// Only the first call configures the logger. Later calls return the
/// directory already in use and leave the level untouched.
pub fn initialize(level: &str, dir: &Path) -> Result<PathBuf> {
	let level = normalize_level(level)?;
	if let Some(state) = LOGGER.get() {
		return Ok(state.dir.clone());
	}

	std::fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let handle = Logger::try_with_str(level)
		.with_context(|| format!("invalid log level {level}"))?
		.log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
		.rotate(
			Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
			Naming::Numbers,
			Cleanup::KeepLogFiles(MAX_LOG_FILES),
		)
		.write_mode(WriteMode::BufferAndFlush)
		.append()
		.format_for_files(flexi_logger::detailed_format)
		.start()
		.context("failed to start logger")?;

	let state = LOGGER.get_or_init(|| LoggingState {
		level,
		dir: dir.to_path_buf(),
		_handle: handle,
	});
	info!(
		"postsearch {} started (log level {})",
		env!("CARGO_PKG_VERSION"),
		state.level
	);
	Ok(state.dir.clone())
}

/// `<data dir>/logs`.
pub fn default_log_dir() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join("logs"))
}

/// Map user input onto one of the `log` crate's level names.
pub fn normalize_level(level: &str) -> Result<&'static str> {
	match level.trim().to_ascii_lowercase().as_str() {
		"off" => Ok("off"),
		"trace" => Ok("trace"),
		"debug" => Ok("debug"),
		"info" => Ok("info"),
		"warn" | "warning" => Ok("warn"),
		"error" => Ok("error"),
		other => bail!("unsupported log level `{other}`; expected off|trace|debug|info|warn|error"),
	}
}
