use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) theme: Option<SettingSource>,
	pub(crate) clear_label: Option<SettingSource>,
	pub(crate) mark_open: Option<SettingSource>,
	pub(crate) mark_close: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme.clone().unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_clear_label(&self) -> SettingSource {
		self.clear_label
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.clear_label"))
	}

	pub(crate) fn source_for_mark_open(&self) -> SettingSource {
		self.mark_open
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.mark_open"))
	}

	pub(crate) fn source_for_mark_close(&self) -> SettingSource {
		self.mark_close
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.mark_close"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.log_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("log.level"))
	}
}
