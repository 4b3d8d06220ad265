//! Word wrapping for styled lines.
//!
//! Styles are tracked per grapheme cluster so a wrap point can fall inside or
//! next to a highlighted match without losing the highlight, and never between
//! a base character and its combining marks.

use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

type Cell<'l> = (&'l str, Style);

/// Break `line` into rows no wider than `width` columns.
///
/// Words move to the next row when they do not fit; words wider than a whole
/// row are split. Whitespace that would overflow a row is dropped at the
/// break.
#[must_use]
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
	let cells: Vec<Cell<'_>> = line
		.spans
		.iter()
		.flat_map(|span| {
			let style = line.style.patch(span.style);
			span.content.graphemes(true).map(move |grapheme| (grapheme, style))
		})
		.collect();

	if width == 0 {
		return vec![to_line(&cells)];
	}

	let mut rows: Vec<Vec<Cell<'_>>> = Vec::new();
	let mut current: Vec<Cell<'_>> = Vec::new();
	let mut current_width = 0;
	let mut index = 0;

	while index < cells.len() {
		let word_end = index
			+ cells[index..]
				.iter()
				.take_while(|(grapheme, _)| !is_blank(grapheme))
				.count();
		let gap_end = word_end
			+ cells[word_end..]
				.iter()
				.take_while(|(grapheme, _)| is_blank(grapheme))
				.count();

		let word = &cells[index..word_end];
		let word_width = cells_width(word);
		if current_width > 0 && current_width + word_width > width {
			rows.push(mem::take(&mut current));
			current_width = 0;
		}

		if word_width > width {
			for &cell in word {
				let cell_width = cell.0.width();
				if current_width > 0 && current_width + cell_width > width {
					rows.push(mem::take(&mut current));
					current_width = 0;
				}
				current.push(cell);
				current_width += cell_width;
			}
		} else {
			current.extend_from_slice(word);
			current_width += word_width;
		}

		for &cell in &cells[word_end..gap_end] {
			let cell_width = cell.0.width();
			if current_width + cell_width <= width {
				current.push(cell);
				current_width += cell_width;
			}
		}

		index = gap_end;
	}

	if !current.is_empty() || rows.is_empty() {
		rows.push(current);
	}

	rows.iter().map(|row| to_line(row)).collect()
}

fn is_blank(grapheme: &str) -> bool {
	grapheme.chars().all(char::is_whitespace)
}

fn cells_width(cells: &[Cell<'_>]) -> usize {
	cells.iter().map(|(grapheme, _)| grapheme.width()).sum()
}

fn to_line(cells: &[Cell<'_>]) -> Line<'static> {
	let mut spans = Vec::new();
	let mut buffer = String::new();
	let mut style: Option<Style> = None;

	for &(grapheme, cell_style) in cells {
		if style.is_some_and(|current| current != cell_style) && !buffer.is_empty() {
			spans.push(Span::styled(mem::take(&mut buffer), style.unwrap_or_default()));
		}
		style = Some(cell_style);
		buffer.push_str(grapheme);
	}

	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style.unwrap_or_default()));
	}

	Line::from(spans)
}
