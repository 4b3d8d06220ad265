use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Heading: {}", config.labels.heading);
	let _ = writeln!(out, "  Input label: {}", config.labels.input_label);
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  Clear label: {}", config.labels.clear_label);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(
		out,
		"  Match markers: {}…{}",
		config.markers.open, config.markers.close
	);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	match &config.log_dir {
		Some(dir) => {
			let _ = writeln!(out, "  Log directory: {}", dir.display());
		}
		None => {
			let _ = writeln!(out, "  Log directory: (data directory)");
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use postsearch::UiLabels;

	use super::*;
	use crate::cli::Markers;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			labels: UiLabels::default(),
			initial_query: "grid".into(),
			theme: Some("paper".into()),
			markers: Markers::default(),
			log_level: "debug".into(),
			log_dir: None,
		};

		insta::assert_snapshot!(format_summary(&config), @r"
		Effective configuration:
		  Heading: Search
		  Input label: articles
		  Placeholder: Search articles...
		  Clear label: x
		  UI theme: paper
		  Initial query: grid
		  Match markers: **…**
		  Log level: debug
		  Log directory: (data directory)
		");
	}
}
