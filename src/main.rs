mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_results_json, print_results_plain};
use log::{debug, info};
use postsearch::{ARTICLES, ResultsView, SearchPage, logging, ui::style};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	start_logging(&resolved);

	if cli.print {
		print_results(cli.output, &resolved)
	} else {
		run_search(cli.output, resolved)
	}
}

/// Logging failures are reported but never stop the search page.
fn start_logging(settings: &ResolvedConfig) {
	let dir = match settings.log_dir.clone() {
		Some(dir) => Ok(dir),
		None => logging::default_log_dir(),
	};
	let result = dir.and_then(|dir| logging::initialize(&settings.log_level, &dir));
	match result {
		Ok(dir) => info!("logging to {}", dir.display()),
		Err(err) => eprintln!("postsearch: file logging disabled: {err:#}"),
	}
}

/// Filter and highlight once, then print without opening the terminal UI.
fn print_results(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let results = ResultsView::compute(&ARTICLES, &settings.initial_query);
	match format {
		OutputFormat::Plain => print_results_plain(&results, &settings.markers),
		OutputFormat::Json => print_results_json(&results)?,
	}
	Ok(())
}

/// Run the interactive page and print the outcome in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let mut page = SearchPage::default()
		.with_initial_query(settings.initial_query)
		.with_labels(settings.labels);
	if let Some(name) = settings.theme.as_deref() {
		page = page.try_theme_name(name)?;
		info!("using theme {name}");
	} else {
		debug!("no theme configured; using the default");
	}

	let outcome = page.run().context("search page failed")?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
