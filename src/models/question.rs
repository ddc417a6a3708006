use serde::Serialize;

use super::grammar::{Case, Number, Paradigm};
use super::word::WordEntry;

/// The three interchangeable question shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum QuestionFormat {
    /// Show a description, ask for the ending.
    EndingFromDescription,
    /// Show an ending, ask for the description.
    DescriptionFromEnding,
    /// Show an inflected word, ask for the description.
    DescriptionFromWord,
}

impl QuestionFormat {
    pub const ALL: [QuestionFormat; 3] = [
        QuestionFormat::EndingFromDescription,
        QuestionFormat::DescriptionFromEnding,
        QuestionFormat::DescriptionFromWord,
    ];

    pub fn number(self) -> u8 {
        match self {
            QuestionFormat::EndingFromDescription => 1,
            QuestionFormat::DescriptionFromEnding => 2,
            QuestionFormat::DescriptionFromWord => 3,
        }
    }

    /// Whether the options are bare endings rather than descriptions.
    pub fn answers_are_endings(self) -> bool {
        self == QuestionFormat::EndingFromDescription
    }
}

impl From<QuestionFormat> for u8 {
    fn from(format: QuestionFormat) -> Self {
        format.number()
    }
}

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position of the slot that produced this question.
    pub id: usize,
    pub format: QuestionFormat,
    pub prompt: String,
    pub correct_answer: String,
    /// Unique options in display order; contains `correct_answer` once.
    pub options: Vec<String>,
    #[serde(flatten)]
    pub paradigm: Paradigm,
    pub number: Number,
    pub case: Case,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordEntry>,
}

impl Question {
    pub fn correct_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| *option == self.correct_answer)
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .is_some_and(|option| *option == self.correct_answer)
    }
}
