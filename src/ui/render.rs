use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{InputContext, ResultsContext, render_input, render_results};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let heading = Paragraph::new(self.labels.heading.as_str()).style(self.theme.heading);
		frame.render_widget(heading, layout[0]);

		let input_ctx = InputContext {
			query_input: &self.query_input,
			label: &self.labels.input_label,
			clear_label: &self.labels.clear_label,
			area: layout[2],
			theme: &self.theme,
		};
		self.clear_area = render_input(frame, input_ctx);

		frame.render_widget(self.count_line(), layout[3]);
		self.render_result_list(frame, layout[5]);

		let hint = Paragraph::new(self.labels.hint.as_str())
			.alignment(Alignment::Right)
			.style(self.theme.muted);
		frame.render_widget(hint, layout[6]);
	}

	fn count_line(&self) -> Paragraph<'static> {
		let count = self.results.len();
		let line = Line::from(vec![
			Span::styled(crate::results::count_label(count), self.theme.count),
			Span::styled(" were found", self.theme.muted),
		]);
		Paragraph::new(line)
	}

	fn render_result_list(&mut self, frame: &mut Frame, area: Rect) {
		let context = ResultsContext {
			results: &self.results,
			area,
			theme: &self.theme,
		};
		render_results(frame, context, &mut self.list_state);
	}
}
