mod answer;
pub mod grammar;
mod question;
mod settings;
mod word;

pub use answer::{AnswerRecord, QuizSummary};
pub use grammar::{
    Case, Declension, FifthKind, FourthKind, Gender, Number, Paradigm, ParseGrammarError, Stem,
};
pub use question::{Question, QuestionFormat};
pub use settings::{DEFAULT_CASES, DEFAULT_LENGTH, LENGTH_CHOICES, QuizSettings, SettingsError};
pub use word::WordEntry;

/// Screen the terminal application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Quiz,
    Result,
}
