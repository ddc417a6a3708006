//! Distractor sampling.
//!
//! Both samplers walk the selected declensions (in the order given), then
//! [`Number::ALL`], then the selected cases (in the order given), drawing a
//! fresh random paradigm for every combination. They return the correct
//! answer exactly once among unique, shuffled options, and fewer options when
//! the selection does not offer enough distinct alternatives.

use rand::Rng;
use rand::seq::SliceRandom;

use super::format::describe;
use crate::data::EndingTable;
use crate::models::{Number, Paradigm, QuizSettings};

/// Most wrong answers a question offers.
pub const MAX_DISTRACTORS: usize = 3;

/// Distinct endings (correct one included) gathered before stopping.
const ENDING_CANDIDATES: usize = 6;

/// Description options (correct one included) per question.
const DESCRIPTION_OPTIONS: usize = 3;

/// Options for a question whose answer is the ending `correct`.
pub fn ending_options<R: Rng + ?Sized>(
    table: &EndingTable,
    settings: &QuizSettings,
    correct: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut distractors: Vec<String> = Vec::new();

    'sampling: for &declension in settings.declensions() {
        for number in Number::ALL {
            for &case in settings.cases() {
                if distractors.len() + 1 >= ENDING_CANDIDATES {
                    break 'sampling;
                }

                let paradigm = Paradigm::random(declension, rng);
                if let Some(ending) = table.resolve(&paradigm, number, case) {
                    if ending != correct && !distractors.iter().any(|seen| seen == ending) {
                        distractors.push(ending.to_string());
                    }
                }
            }
        }
    }

    distractors.truncate(MAX_DISTRACTORS);
    with_correct(distractors, correct, rng)
}

/// Options for a question whose answer is the description `correct`.
///
/// Only forms that exist in `table` are offered, never a description of a
/// form the language lacks (such as a 4th declension locative). With `avoid`, a candidate
/// whose ending equals it is skipped: the question already shows that ending,
/// so such a candidate would be another right answer.
pub fn description_options<R: Rng + ?Sized>(
    table: &EndingTable,
    settings: &QuizSettings,
    correct: &str,
    avoid: Option<&str>,
    rng: &mut R,
) -> Vec<String> {
    let mut distractors: Vec<String> = Vec::new();

    'sampling: for &declension in settings.declensions() {
        for number in Number::ALL {
            for &case in settings.cases() {
                if distractors.len() + 1 >= DESCRIPTION_OPTIONS {
                    break 'sampling;
                }

                let paradigm = Paradigm::random(declension, rng);
                let text = describe(&paradigm, number, case);
                if text == correct || distractors.contains(&text) {
                    continue;
                }

                match table.resolve(&paradigm, number, case) {
                    None => continue,
                    Some(ending) if Some(ending) == avoid => continue,
                    Some(_) => distractors.push(text),
                }
            }
        }
    }

    with_correct(distractors, correct, rng)
}

/// Uniform random permutation of `options`.
pub fn shuffle_options<T, R: Rng + ?Sized>(options: &mut [T], rng: &mut R) {
    options.shuffle(rng);
}

fn with_correct<R: Rng + ?Sized>(
    mut distractors: Vec<String>,
    correct: &str,
    rng: &mut R,
) -> Vec<String> {
    distractors.push(correct.to_string());
    shuffle_options(&mut distractors, rng);
    distractors
}
