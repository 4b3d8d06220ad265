mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{Markers, print_json, print_plain, print_results_json, print_results_plain};
