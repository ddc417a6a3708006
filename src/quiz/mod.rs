//! Quiz question generation.
//!
//! [`QuizGenerator`] fills each slot of a quiz with a random question of one
//! of the three [`QuestionFormat`]s. Combinations whose ending does not exist
//! are redrawn a bounded number of times; a slot that never finds one is left
//! empty, so a quiz can be shorter than requested.

mod format;
mod options;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::data::ReferenceData;
use crate::models::{Case, Declension, Number, Paradigm, Question, QuestionFormat, QuizSettings};

pub use format::describe;
pub use options::{MAX_DISTRACTORS, description_options, ending_options, shuffle_options};

/// Attempts per slot before it is given up.
pub const DEFAULT_SLOT_ATTEMPTS: usize = 10;

/// The random choices behind one question.
#[derive(Debug, Clone, Copy)]
struct Draw {
    format: QuestionFormat,
    declension: Declension,
    number: Number,
    case: Case,
}

pub struct QuizGenerator<'a, R> {
    data: &'a ReferenceData,
    settings: &'a QuizSettings,
    rng: R,
    attempts: usize,
}

impl<'a, R: Rng> QuizGenerator<'a, R> {
    pub fn new(data: &'a ReferenceData, settings: &'a QuizSettings, rng: R) -> Self {
        Self {
            data,
            settings,
            rng,
            attempts: DEFAULT_SLOT_ATTEMPTS,
        }
    }

    /// Sets how many random combinations a slot may try. `1` drops a slot as
    /// soon as its first combination is not applicable.
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Generates up to `settings.length()` questions, ids are 1-based slot
    /// positions.
    pub fn generate_quiz(&mut self) -> Vec<Question> {
        let length = self.settings.length();
        let questions: Vec<Question> = (1..=length)
            .filter_map(|id| self.generate_slot(id))
            .collect();

        info!(
            requested = length,
            generated = questions.len(),
            "generated quiz"
        );
        questions
    }

    fn generate_slot(&mut self, id: usize) -> Option<Question> {
        for attempt in 1..=self.attempts {
            let draw = self.draw()?;
            if let Some(question) = self.generate_question(id, draw) {
                return Some(question);
            }
            debug!(
                slot = id,
                attempt,
                format = draw.format.number(),
                declension = draw.declension.number(),
                number = %draw.number,
                case = %draw.case,
                "combination not applicable"
            );
        }

        debug!(slot = id, "slot left empty");
        None
    }

    /// `None` only if a selection is empty, which validated settings rule out.
    fn draw(&mut self) -> Option<Draw> {
        let format = *QuestionFormat::ALL.choose(&mut self.rng)?;
        let declension = *self.settings.declensions().choose(&mut self.rng)?;
        let case = *self.settings.cases().choose(&mut self.rng)?;
        let number = Number::random(&mut self.rng);

        Some(Draw {
            format,
            declension,
            number,
            case,
        })
    }

    fn generate_question(&mut self, id: usize, draw: Draw) -> Option<Question> {
        match draw.format {
            QuestionFormat::EndingFromDescription => self.ending_question(id, draw),
            QuestionFormat::DescriptionFromEnding => self.description_question(id, draw),
            QuestionFormat::DescriptionFromWord => self.word_question(id, draw),
        }
    }

    fn ending_question(&mut self, id: usize, draw: Draw) -> Option<Question> {
        let paradigm = Paradigm::random(draw.declension, &mut self.rng);
        let ending = self
            .data
            .resolve_ending(&paradigm, draw.number, draw.case)?
            .to_string();

        let prompt = describe(&paradigm, draw.number, draw.case);
        let options = ending_options(self.data.endings(), self.settings, &ending, &mut self.rng);

        Some(Question {
            id,
            format: draw.format,
            prompt,
            correct_answer: ending,
            options,
            paradigm,
            number: draw.number,
            case: draw.case,
            word: None,
        })
    }

    fn description_question(&mut self, id: usize, draw: Draw) -> Option<Question> {
        let paradigm = Paradigm::random(draw.declension, &mut self.rng);
        let ending = self
            .data
            .resolve_ending(&paradigm, draw.number, draw.case)?
            .to_string();

        let correct = describe(&paradigm, draw.number, draw.case);
        let options = description_options(
            self.data.endings(),
            self.settings,
            &correct,
            Some(&ending),
            &mut self.rng,
        );

        Some(Question {
            id,
            format: draw.format,
            prompt: format!("What declension has the ending: -{ending}"),
            correct_answer: correct,
            options,
            paradigm,
            number: draw.number,
            case: draw.case,
            word: None,
        })
    }

    fn word_question(&mut self, id: usize, draw: Draw) -> Option<Question> {
        let word = self.data.words(draw.declension).choose(&mut self.rng)?;
        let ending = self
            .data
            .resolve_ending(&word.paradigm, draw.number, draw.case)?;

        let prompt = format!("{}{}", word.display_stem(draw.number, draw.case), ending);
        let correct = describe(&word.paradigm, draw.number, draw.case);
        let options = description_options(
            self.data.endings(),
            self.settings,
            &correct,
            None,
            &mut self.rng,
        );

        Some(Question {
            id,
            format: draw.format,
            prompt,
            correct_answer: correct,
            options,
            paradigm: word.paradigm,
            number: draw.number,
            case: draw.case,
            word: Some(word.clone()),
        })
    }
}
