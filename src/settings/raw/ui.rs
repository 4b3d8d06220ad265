use postsearch::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Page text and startup values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) heading: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) input_label: Option<String>,
	pub(super) clear_label: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(heading) = cli.heading.clone() {
			self.heading = Some(heading);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(heading) = self.heading {
			labels.heading = heading;
		}
		if let Some(placeholder) = self.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(label) = self.input_label {
			labels.input_label = label;
		}
		if let Some(label) = self.clear_label {
			labels.clear_label = label;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme.filter(|name| !name.trim().is_empty()),
		}
	}
}
