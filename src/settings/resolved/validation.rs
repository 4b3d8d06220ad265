use postsearch::{logging, ui::style};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; available: {}", style::names().join(", ")),
		));
	}

	if config.labels.clear_label.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.clear_label",
			config.labels.clear_label.clone(),
			sources.source_for_clear_label(),
			"must not be blank; the clear control would be invisible",
		));
	}

	if config.markers.open.is_empty() {
		return Err(ConfigError::invalid(
			"output.mark_open",
			"",
			sources.source_for_mark_open(),
			"must not be empty",
		));
	}

	if config.markers.close.is_empty() {
		return Err(ConfigError::invalid(
			"output.mark_close",
			"",
			sources.source_for_mark_close(),
			"must not be empty",
		));
	}

	if let Err(err) = logging::normalize_level(&config.log_level) {
		return Err(ConfigError::invalid(
			"log.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			err.to_string(),
		));
	}

	Ok(())
}
