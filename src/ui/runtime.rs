use std::collections::VecDeque;
use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::debug;
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event,
	KeyEventKind,
};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::execute;

use crate::articles::Article;
use crate::outcome::SearchOutcome;
use crate::ui::App;

/// Construct an [`App`] for `articles` and run it to completion.
pub fn run(articles: &[Article]) -> Result<SearchOutcome> {
	let mut app = App::new(articles);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = enter_session(&mut terminal, &mut stdout()) {
			restore_terminal();
			return Err(err);
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			match self.process_events(&mut pending_events) {
				Ok(Some(outcome)) => break Ok(outcome),
				Ok(None) => {}
				Err(err) => break Err(err),
			}

			thread::sleep(Duration::from_millis(16));
		};

		restore_terminal();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Apply queued input events in order, stopping at the first one that
	/// ends the session. Events after it are left in the queue.
	pub(crate) fn process_events(
		&mut self,
		pending: &mut VecDeque<Event>,
	) -> Result<Option<SearchOutcome>> {
		while let Some(event) = pending.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						debug!("session finished (accepted: {})", outcome.accepted);
						return Ok(Some(outcome));
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				Event::Paste(text) => {
					if self.query_input.insert_str(&text) {
						self.recompute();
					}
				}
				_ => {}
			}
		}
		Ok(None)
	}
}

/// Turn on mouse capture and bracketed paste, then blank the screen. Any
/// failure must be followed by [`restore_terminal`].
fn enter_session<B: Backend>(terminal: &mut Terminal<B>, out: &mut impl Write) -> Result<()> {
	execute!(out, EnableMouseCapture, EnableBracketedPaste)?;
	terminal.clear()?;
	Ok(())
}

fn leave_session(out: &mut impl Write) {
	let _ = execute!(out, DisableBracketedPaste, DisableMouseCapture);
}

fn restore_terminal() {
	leave_session(&mut stdout());
	ratatui::restore();
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use std::io;

	use ratatui::backend::TestBackend;

	use super::*;
	use crate::articles::ARTICLES;

	struct BrokenPipe;

	impl Write for BrokenPipe {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::from(io::ErrorKind::BrokenPipe))
		}

		fn flush(&mut self) -> io::Result<()> {
			Err(io::Error::from(io::ErrorKind::BrokenPipe))
		}
	}

	fn press(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn queued_keys_are_applied_in_order() {
		let mut app = App::new(&ARTICLES);
		let mut pending: VecDeque<Event> = "flex".chars().map(|ch| press(KeyCode::Char(ch))).collect();

		let outcome = app.process_events(&mut pending).expect("process events");
		assert!(outcome.is_none());
		assert_eq!(app.query(), "flex");
		assert_eq!(app.results().len(), 2);
	}

	#[test]
	fn events_after_exit_stay_queued() {
		let mut app = App::with_query(&ARTICLES, "grid");
		let mut pending = VecDeque::from([press(KeyCode::Enter), press(KeyCode::Char('x'))]);

		let outcome = app
			.process_events(&mut pending)
			.expect("process events")
			.expect("enter should end the session");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.map(|article| article.id), Some(1));
		assert_eq!(pending.len(), 1);
		assert_eq!(app.query(), "grid");
	}

	#[test]
	fn key_releases_are_ignored() {
		let mut app = App::new(&ARTICLES);
		let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
		release.kind = KeyEventKind::Release;
		let mut pending = VecDeque::from([Event::Key(release)]);

		assert!(app.process_events(&mut pending).expect("process events").is_none());
		assert_eq!(app.query(), "");
	}

	#[test]
	fn pasted_text_updates_the_query() {
		let mut app = App::new(&ARTICLES);
		let mut pending = VecDeque::from([Event::Paste("Next.js\nignored".to_string())]);

		app.process_events(&mut pending).expect("process events");
		assert_eq!(app.query(), "Next.js");
		assert_eq!(app.results().len(), 1);
	}

	#[test]
	fn session_setup_enables_modes_and_clears() {
		let mut terminal = Terminal::new(TestBackend::new(12, 2)).expect("terminal");
		terminal
			.draw(|frame| frame.render_widget("leftover", frame.area()))
			.expect("draw");
		let mut out = Vec::new();

		enter_session(&mut terminal, &mut out).expect("setup succeeds");

		let written = String::from_utf8(out).expect("utf8");
		assert!(written.contains("\x1b[?2004h"), "{written:?}");
		assert!(written.contains("\x1b[?1000h"), "{written:?}");
		terminal.backend().assert_buffer_lines(["            ", "            "]);
	}

	#[test]
	fn session_setup_failure_is_returned_to_the_caller() {
		let mut terminal = Terminal::new(TestBackend::new(12, 2)).expect("terminal");
		assert!(enter_session(&mut terminal, &mut BrokenPipe).is_err());
	}

	#[test]
	fn session_teardown_disables_modes() {
		let mut out = Vec::new();
		leave_session(&mut out);
		let written = String::from_utf8(out).expect("utf8");
		assert!(written.contains("\x1b[?2004l"), "{written:?}");
		assert!(written.contains("\x1b[?1000l"), "{written:?}");
	}
}
