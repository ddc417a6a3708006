use crate::models::{Case, Number, Paradigm};

/// Human-readable description of a form, e.g.
/// `"3rd Declension, Plural, Genitive, Neuter, Mixed"`.
///
/// Gender is only shown for the 2nd declension, gender and stem only for the
/// 3rd (and only when both are known), the type only for the 4th and 5th.
pub fn describe(paradigm: &Paradigm, number: Number, case: Case) -> String {
    let mut text = format!("{}, {}, {}", paradigm.declension(), number, case);

    match *paradigm {
        Paradigm::First => {}
        Paradigm::Second { gender } => {
            if let Some(gender) = gender {
                text.push_str(&format!(", {gender}"));
            }
        }
        Paradigm::Third { gender, stem } => {
            if let (Some(gender), Some(stem)) = (gender, stem) {
                text.push_str(&format!(", {gender}, {}", stem.as_str()));
            }
        }
        Paradigm::Fourth { .. } | Paradigm::Fifth { .. } => {
            if let Some(kind) = paradigm.type_label() {
                text.push_str(&format!(", -{kind} ending"));
            }
        }
    }

    text
}
