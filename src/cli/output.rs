use std::fmt::Write;

use anyhow::Result;
use postsearch::{HighlightSpan, ResultsView, SearchOutcome};
use serde_json::json;

/// Strings wrapped around matched text in plain output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Markers {
	pub(crate) open: String,
	pub(crate) close: String,
}

impl Default for Markers {
	fn default() -> Self {
		Self {
			open: "**".to_string(),
			close: "**".to_string(),
		}
	}
}

fn marked(spans: &[HighlightSpan<'_>], markers: &Markers) -> String {
	spans.iter().fold(String::new(), |mut out, span| {
		if span.matched {
			out.push_str(&markers.open);
			out.push_str(span.text);
			out.push_str(&markers.close);
		} else {
			out.push_str(span.text);
		}
		out
	})
}

/// Render the count message followed by one block per visible article.
pub(crate) fn format_results_plain(results: &ResultsView<'_>, markers: &Markers) -> String {
	let mut out = results.count_message();
	for entry in results.entries() {
		let _ = writeln!(out);
		let _ = writeln!(out);
		let _ = writeln!(out, "[{}] {}", entry.id, marked(&entry.title, markers));
		let _ = writeln!(out, "    {}", entry.date);
		let _ = write!(out, "    {}", marked(&entry.body, markers));
	}
	out
}

pub(crate) fn format_results_json(results: &ResultsView<'_>) -> Result<String> {
	let payload = json!({
		"query": results.query(),
		"count": results.len(),
		"message": results.count_message(),
		"results": results.entries(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_results_plain(results: &ResultsView<'_>, markers: &Markers) {
	println!("{}", format_results_plain(results, markers));
}

pub(crate) fn print_results_json(results: &ResultsView<'_>) -> Result<()> {
	println!("{}", format_results_json(results)?);
	Ok(())
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(article) => println!("[{}] {} ({})", article.id, article.title, article.date_label()),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(article) => json!({
			"id": article.id,
			"title": article.title,
			"body": article.body,
			"date": article.date,
			"date_label": article.date_label(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
