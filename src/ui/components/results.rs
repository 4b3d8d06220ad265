use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState};

use crate::results::{ResultEntry, ResultsView};
use crate::search::HighlightSpan;
use crate::ui::style::Theme;
use crate::ui::wrap::wrap_line;

const SELECTION_SYMBOL: &str = "▌ ";
const SELECTION_SYMBOL_WIDTH: u16 = 2;

/// Argument bundle for rendering the result list.
pub struct ResultsContext<'a> {
	pub results: &'a ResultsView<'a>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render every visible article as a multi-line list entry.
pub fn render_results(frame: &mut Frame, context: ResultsContext<'_>, state: &mut ListState) {
	let ResultsContext {
		results,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let text_width = area.width.saturating_sub(SELECTION_SYMBOL_WIDTH);
	let items = build_result_items(results, text_width, theme);
	let list = List::new(items)
		.highlight_symbol(SELECTION_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(theme.selected);
	frame.render_stateful_widget(list, area, state);
}

/// Build list items for `results`, wrapping titles and bodies to `width`.
#[must_use]
pub fn build_result_items(
	results: &ResultsView<'_>,
	width: u16,
	theme: &Theme,
) -> Vec<ListItem<'static>> {
	let last = results.len().saturating_sub(1);
	results
		.entries()
		.iter()
		.enumerate()
		.map(|(index, entry)| ListItem::new(entry_text(entry, usize::from(width), theme, index < last)))
		.collect()
}

fn entry_text(entry: &ResultEntry<'_>, width: usize, theme: &Theme, separated: bool) -> Text<'static> {
	let mut lines = Vec::new();
	lines.extend(wrap_line(&highlighted_line(&entry.title, theme.title, theme.highlight), width));
	lines.push(Line::from(Span::styled(entry.date.clone(), theme.date)));
	lines.extend(wrap_line(&highlighted_line(&entry.body, theme.body, theme.highlight), width));
	if separated {
		lines.push(Line::default());
	}
	Text::from(lines)
}

/// Convert highlight spans into a styled line. Matched spans take `base`
/// patched with `highlight`; their text is never altered.
#[must_use]
pub fn highlighted_line<'a>(spans: &[HighlightSpan<'a>], base: Style, highlight: Style) -> Line<'a> {
	let matched = base.patch(highlight);
	Line::from(
		spans
			.iter()
			.filter(|span| !span.text.is_empty())
			.map(|span| {
				let style = if span.matched { matched } else { base };
				Span::styled(span.text, style)
			})
			.collect::<Vec<_>>(),
	)
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;
	use crate::articles::ARTICLES;

	#[test]
	fn matched_spans_use_highlight_background() {
		let theme = Theme::default();
		let spans = [HighlightSpan::matched("Hello"), HighlightSpan::plain(" World")];
		let line = highlighted_line(&spans, theme.title, theme.highlight);

		assert_eq!(line.to_string(), "Hello World");
		assert_eq!(line.spans[0].style, theme.title.patch(theme.highlight));
		assert_eq!(line.spans[1].style, theme.title);
		assert!(line.spans[0].style.bg.is_some());
		assert_ne!(line.spans[0].style.bg, Some(Color::Reset));
	}

	#[test]
	fn items_contain_title_date_and_body() {
		let theme = Theme::default();
		let results = ResultsView::compute(&ARTICLES, "regexp");
		let items = build_result_items(&results, 200, &theme);
		assert_eq!(items.len(), 1);
		// title, date, body; the only entry has no trailing separator
		assert_eq!(items[0].height(), 3);
	}

	#[test]
	fn entries_are_separated_by_blank_lines() {
		let theme = Theme::default();
		let results = ResultsView::compute(&ARTICLES, "flexbox");
		let items = build_result_items(&results, 200, &theme);
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].height(), 4);
		assert_eq!(items[1].height(), 3);
	}

	#[test]
	fn narrow_width_wraps_bodies() {
		let theme = Theme::default();
		let results = ResultsView::compute(&ARTICLES, "regexp");
		let items = build_result_items(&results, 20, &theme);
		assert!(items[0].height() > 3);
	}
}
