use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub query_input: &'a QueryInput<'a>,
	pub label: &'a str,
	pub clear_label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render `label > query [x]` and return where the clear control landed.
///
/// The clear control is only drawn while the query is non-empty; `None` is
/// returned otherwise so stale click targets are dropped.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) -> Option<Rect> {
	let InputContext {
		query_input,
		label,
		clear_label,
		area,
		theme,
	} = input;

	let show_clear = !query_input.is_empty() && !clear_label.is_empty();
	let prompt_width = calculate_prompt_width(label);
	let clear_width = if show_clear {
		calculate_clear_width(clear_label)
	} else {
		0
	};

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(prompt_width, clear_width))
		.split(area);

	if prompt_width > 0 {
		let prompt = Paragraph::new(format!("{label} > ")).style(theme.prompt);
		frame.render_widget(prompt, columns[0]);
	}

	query_input.render(frame, columns[1]);

	if !show_clear {
		return None;
	}

	let clear_area = columns[2];
	if clear_area.width == 0 {
		return None;
	}
	let control = Paragraph::new(format!(" {clear_label} ")).style(theme.clear);
	frame.render_widget(control, clear_area);
	Some(clear_area)
}

fn calculate_prompt_width(label: &str) -> u16 {
	if label.is_empty() {
		0
	} else {
		u16::try_from(label.width() + 3).unwrap_or(u16::MAX)
	}
}

fn calculate_clear_width(clear_label: &str) -> u16 {
	u16::try_from(clear_label.width() + 2).unwrap_or(u16::MAX)
}

fn layout_constraints(prompt_width: u16, clear_width: u16) -> [Constraint; 3] {
	[
		Constraint::Length(prompt_width),
		Constraint::Min(1),
		Constraint::Length(clear_width),
	]
}
