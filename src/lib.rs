//! # latin-quiz
//!
//! Multiple-choice quizzes on Latin noun declension endings.
//!
//! The core is [`QuizGenerator`]: it draws a declension, case, number and
//! gender/type from the user's [`QuizSettings`], looks the ending up in the
//! [`ReferenceData`] and builds the question with plausible wrong options.
//! [`Quiz`] wraps it in a terminal front end.
//!
//! ## Usage
//!
//! ```rust
//! use latin_quiz::{Case, Declension, QuizGenerator, QuizSettings, ReferenceData};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data = ReferenceData::bundled();
//! let settings = QuizSettings::new([Declension::First], [Case::Genitive], 5).unwrap();
//! let questions = QuizGenerator::new(&data, &settings, ChaCha8Rng::seed_from_u64(7))
//!     .generate_quiz();
//!
//! assert!(questions.len() <= 5);
//! for question in &questions {
//!     assert!(question.options.contains(&question.correct_answer));
//! }
//! ```

mod app;
mod data;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub use app::{App, SetupForm, SetupRow};
pub use data::{DataSource, EndingTable, LoadError, ReferenceData};
pub use models::{
    AnswerRecord, AppState, Case, DEFAULT_CASES, DEFAULT_LENGTH, Declension, FifthKind,
    FourthKind, Gender, LENGTH_CHOICES, Number, Paradigm, ParseGrammarError, Question,
    QuestionFormat, QuizSettings, QuizSummary, SettingsError, Stem, WordEntry,
};
pub use quiz::{
    DEFAULT_SLOT_ATTEMPTS, MAX_DISTRACTORS, QuizGenerator, describe, description_options,
    ending_options, shuffle_options,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Creates a session starting on the setup screen, prefilled with
    /// `settings`.
    pub fn new(data: ReferenceData, settings: QuizSettings, rng: ChaCha8Rng) -> Self {
        Self {
            app: App::new(data, settings, rng),
        }
    }

    /// Sets how many random combinations each question slot may try.
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.app = self.app.with_attempts(attempts);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Setup => handle_setup_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.setup_mut().move_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.setup_mut().move_down();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.setup_mut().cycle_length(false);
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.setup_mut().cycle_length(true);
            false
        }
        KeyCode::Char(' ') => {
            app.setup_mut().toggle();
            false
        }
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => {
            app.previous_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retake();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.new_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn app() -> App {
        App::new(
            ReferenceData::bundled(),
            QuizSettings::new(Declension::ALL, Case::ALL, 3).unwrap(),
            ChaCha8Rng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let mut app = app();
        assert!(!handle_input(&mut app, KeyCode::Char('j')));
        assert_eq!(app.setup().cursor(), 1);

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        for _ in 0..3 {
            assert!(!handle_input(&mut app, KeyCode::Enter));
        }
        assert_eq!(app.state, AppState::Result);

        assert!(!handle_input(&mut app, KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Setup);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_back_key_in_quiz() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.current_question_number(), 2);
        handle_input(&mut app, KeyCode::Char('b'));
        assert_eq!(app.current_question_number(), 1);
    }

    #[test]
    fn test_quiz_error_from_io() {
        let err: QuizError = io::Error::other("terminal closed").into();
        assert!(matches!(err, QuizError::Io(_)));
        assert_eq!(err.to_string(), "IO error: terminal closed");
    }
}
