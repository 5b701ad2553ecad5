//! TUI application state and logic

use crate::events::{EventSink, GameEvent};
use crate::game::GameStatus;
use crate::session::{Session, rejection_message};
use crate::storage::GameStore;
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration as StdDuration;

/// Application state
pub struct App<S: GameStore, E: EventSink> {
    pub session: Session<S, E>,
    pub messages: Vec<Message>,
    pub show_share: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: GameStore, E: EventSink> App<S, E> {
    #[must_use]
    pub fn new(session: Session<S, E>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            show_share: false,
            should_quit: false,
        };

        match app.session.state().status() {
            GameStatus::Playing => {
                app.add_message("Guess today's 5-letter word!", MessageStyle::Info);
            }
            GameStatus::Won | GameStatus::Lost => {
                app.add_message(
                    "Today's challenge is done. Press 's' to share.",
                    MessageStyle::Info,
                );
            }
        }

        app
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.finished() => self.should_quit = true,
            KeyCode::Char('s') if self.finished() => {
                self.show_share = !self.show_share;
            }
            KeyCode::Char(c) => self.session.type_letter(c),
            KeyCode::Backspace => self.session.erase_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(events) => {
                for event in events {
                    self.announce(&event);
                }
            }
            Err(err) => self.add_message(rejection_message(&err), MessageStyle::Error),
        }
    }

    fn announce(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won { points, attempts } => {
                let rank = self.session.state().rank().unwrap_or("Recruit");
                self.add_message(
                    &format!("Solved in {attempts}! +{points} points - rank: {rank}"),
                    MessageStyle::Success,
                );
                self.add_message("Press 's' to share, 'q' to quit.", MessageStyle::Info);
            }
            GameEvent::Lost { answer } => {
                self.add_message(
                    &format!("Out of attempts - the word was {answer}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 's' to share, 'q' to quit.", MessageStyle::Info);
            }
            GameEvent::AwardBadge { streak } => {
                self.add_message(
                    &format!("{streak}-day streak badge earned!"),
                    MessageStyle::Success,
                );
            }
            GameEvent::AwardPoints { .. } => {}
        }
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.session.state().status() != GameStatus::Playing
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: GameStore, E: EventSink>(app: App<S, E>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GameStore, E: EventSink>(
    terminal: &mut Terminal<B>,
    mut app: App<S, E>,
) -> Result<()> {
    loop {
        let now = Local::now().naive_local();
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Poll with a timeout so the countdown line keeps ticking while idle
        if event::poll(StdDuration::from_secs(30))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;
    use crate::storage::MemoryStore;
    use crate::wordlist;
    use chrono::{Datelike, NaiveDate};

    fn app_for(today: NaiveDate) -> App<MemoryStore, RecordingSink> {
        let session = Session::start(MemoryStore::new(), RecordingSink::default(), today);
        App::new(session)
    }

    fn type_word(app: &mut App<MemoryStore, RecordingSink>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn keystrokes_drive_the_input_buffer() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut app = app_for(today);

        app.handle_key(KeyCode::Char('b'));
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Backspace);

        assert_eq!(app.session.state().current_input(), "B");
    }

    #[test]
    fn short_submission_is_rejected_with_a_message() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut app = app_for(today);

        type_word(&mut app, "bad");

        assert_eq!(app.session.state().attempts(), 0);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text == "Enter a 5-letter word")
        );
    }

    #[test]
    fn winning_announces_points_and_rank() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let answer = wordlist::WORDS[today.ordinal0() as usize % wordlist::WORDS_COUNT];
        let mut app = app_for(today);

        type_word(&mut app, &answer.to_lowercase());

        assert!(app.finished());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("+220 points") && m.text.contains("Chief"))
        );
    }

    #[test]
    fn share_toggle_only_when_finished() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut app = app_for(today);

        // Still playing: 's' is just a letter
        app.handle_key(KeyCode::Char('s'));
        assert!(!app.show_share);
        assert_eq!(app.session.state().current_input(), "S");

        let answer = wordlist::WORDS[today.ordinal0() as usize % wordlist::WORDS_COUNT];
        app.handle_key(KeyCode::Backspace);
        type_word(&mut app, answer);

        app.handle_key(KeyCode::Char('s'));
        assert!(app.show_share);
    }
}
