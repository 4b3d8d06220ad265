use anyhow::Result;
use log::info;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::App;
use super::state::PAGE_STEP;
use crate::outcome::SearchOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => {
				return Ok(Some(SearchOutcome::cancelled(self.query())));
			}
			KeyCode::Esc => {
				if !self.clear_query() {
					return Ok(Some(SearchOutcome::cancelled(self.query())));
				}
			}
			KeyCode::Char('u') if ctrl => {
				self.clear_query();
			}
			KeyCode::Enter => {
				let selection = self.current_selection();
				info!(
					"accepted selection {:?}",
					selection.as_ref().map(|article| article.id)
				);
				return Ok(Some(SearchOutcome::accepted(self.query(), selection)));
			}
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::PageUp => self.move_selection(-(PAGE_STEP as isize)),
			KeyCode::PageDown => self.move_selection(PAGE_STEP as isize),
			_ => {
				if self.query_input.input(key) {
					self.recompute();
				}
			}
		}
		Ok(None)
	}

	/// A left click on the clear control empties the query.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);
		if self.clear_area.is_some_and(|area| area.contains(position)) {
			self.clear_query();
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::layout::Rect;

	use super::*;
	use crate::articles::ARTICLES;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	fn type_query(app: &mut App<'_>, text: &str) {
		for ch in text.chars() {
			let outcome = app.handle_key(key(KeyCode::Char(ch))).expect("handle key");
			assert!(outcome.is_none());
		}
	}

	fn click(column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn typing_filters_on_every_keystroke() {
		let mut app = App::new(&ARTICLES);
		type_query(&mut app, "gr");
		assert_eq!(app.results().len(), 4);
		type_query(&mut app, "id");
		assert_eq!(app.results().len(), 3);
		assert_eq!(app.query(), "grid");
	}

	#[test]
	fn enter_accepts_current_selection() {
		let mut app = App::with_query(&ARTICLES, "hooks");
		app.handle_key(key(KeyCode::Down)).expect("handle key");
		let outcome = app
			.handle_key(key(KeyCode::Enter))
			.expect("handle key")
			.expect("enter should finish the session");
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "hooks");
		assert_eq!(outcome.selection.map(|article| article.id), Some(5));
	}

	#[test]
	fn enter_with_no_results_accepts_nothing() {
		let mut app = App::with_query(&ARTICLES, "zzz");
		let outcome = app
			.handle_key(key(KeyCode::Enter))
			.expect("handle key")
			.expect("enter should finish the session");
		assert!(outcome.accepted);
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn escape_clears_before_quitting() {
		let mut app = App::with_query(&ARTICLES, "grid");
		assert!(app.handle_key(key(KeyCode::Esc)).expect("handle key").is_none());
		assert_eq!(app.query(), "");
		assert_eq!(app.results().len(), ARTICLES.len());

		let outcome = app
			.handle_key(key(KeyCode::Esc))
			.expect("handle key")
			.expect("second escape should quit");
		assert!(!outcome.accepted);
	}

	#[test]
	fn ctrl_c_quits_with_query_intact() {
		let mut app = App::with_query(&ARTICLES, "css");
		let outcome = app
			.handle_key(ctrl('c'))
			.expect("handle key")
			.expect("ctrl-c should quit");
		assert!(!outcome.accepted);
		assert_eq!(outcome.query, "css");
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn ctrl_u_clears_the_query() {
		let mut app = App::with_query(&ARTICLES, "react");
		assert!(app.handle_key(ctrl('u')).expect("handle key").is_none());
		assert_eq!(app.query(), "");
		assert_eq!(app.results().len(), ARTICLES.len());
	}

	#[test]
	fn page_keys_jump_and_clamp() {
		let mut app = App::new(&ARTICLES);
		app.handle_key(key(KeyCode::PageDown)).expect("handle key");
		assert_eq!(app.selected(), Some(PAGE_STEP));
		app.handle_key(key(KeyCode::PageDown)).expect("handle key");
		assert_eq!(app.selected(), Some(ARTICLES.len() - 1));
		app.handle_key(key(KeyCode::PageUp)).expect("handle key");
		app.handle_key(key(KeyCode::PageUp)).expect("handle key");
		assert_eq!(app.selected(), Some(0));
	}

	#[test]
	fn clicking_the_clear_control_resets_the_query() {
		let mut app = App::with_query(&ARTICLES, "grid");
		app.clear_area = Some(Rect::new(30, 2, 3, 1));

		app.handle_mouse(click(10, 2));
		assert_eq!(app.query(), "grid");

		app.handle_mouse(click(31, 2));
		assert_eq!(app.query(), "");
		assert_eq!(app.results().len(), ARTICLES.len());
	}

	#[test]
	fn release_events_do_not_clear() {
		let mut app = App::with_query(&ARTICLES, "grid");
		app.clear_area = Some(Rect::new(30, 2, 3, 1));
		let mut release = click(31, 2);
		release.kind = MouseEventKind::Up(MouseButton::Left);
		app.handle_mouse(release);
		assert_eq!(app.query(), "grid");
	}
}
