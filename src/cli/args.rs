use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use postsearch::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("postsearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "postsearch",
	version,
	long_version = long_version(),
	about = "Search a small catalog of articles with live highlighting",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `postsearch` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "POSTSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: midnight)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "heading",
		value_name = "TEXT",
		help = "Override the page heading (default: Search)"
	)]
	pub(crate) heading: Option<String>,
	#[arg(
		long = "placeholder",
		value_name = "TEXT",
		help = "Override the input placeholder (default: Search articles...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		env = "POSTSEARCH_LOG",
		help = "Log level for the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "print",
		help = "Print matching articles once instead of opening the interactive page (default: disabled)"
	)]
	pub(crate) print: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = CliArgs::try_parse_from(["postsearch"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(!parsed.print);
		assert!(parsed.initial_query.is_none());
	}

	#[test]
	fn config_flag_is_repeatable() {
		let parsed = CliArgs::try_parse_from([
			"postsearch",
			"-c",
			"a.toml",
			"--config",
			"b.toml",
			"-q",
			"grid",
			"--print",
			"-o",
			"json",
		])
		.expect("parses");
		assert_eq!(parsed.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
		assert_eq!(parsed.initial_query.as_deref(), Some("grid"));
		assert!(parsed.print);
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
