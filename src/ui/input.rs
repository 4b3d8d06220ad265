//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Editable query text. Keys that would start a second line are ignored.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let first_line = initial.lines().next().unwrap_or_default().to_string();
		let mut textarea = TextArea::new(vec![first_line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Apply placeholder text and the styles used for typed text and the
	/// placeholder.
	pub fn set_appearance(&mut self, placeholder: &str, text: Style, placeholder_style: Style) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(placeholder_style);
		self.textarea.set_style(text);
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Insert pasted text at the cursor. Only the first line is kept.
	pub fn insert_str(&mut self, text: &str) -> bool {
		let first_line = text.lines().next().unwrap_or_default();
		if first_line.is_empty() {
			return false;
		}
		self.textarea.insert_str(first_line)
	}

	/// Remove the whole query. Returns `true` when there was anything to
	/// remove.
	pub fn clear(&mut self) -> bool {
		if self.is_empty() {
			return false;
		}
		self.textarea.move_cursor(CursorMove::End);
		self.textarea.delete_line_by_head()
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Char('\n' | '\r') => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
