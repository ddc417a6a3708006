use serde::Serialize;

use super::grammar::{Case, Declension, Gender, Number, Paradigm};

/// An example noun from the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// Stem the endings are appended to.
    pub word: String,
    /// The noun's own gender and type.
    #[serde(flatten)]
    pub paradigm: Paradigm,
    /// Full nominative singular for 3rd declension nouns whose nominative is
    /// not stem + ending (`rēx` for the stem `rēg`).
    #[serde(rename = "nom", skip_serializing_if = "Option::is_none")]
    pub nominative: Option<String>,
}

impl WordEntry {
    /// The form shown before the ending in `number` and `case`.
    ///
    /// 3rd declension singular forms without an ending (nominative, vocative,
    /// and the neuter accusative) use the override when one exists; every
    /// other form uses the stem.
    pub fn display_stem(&self, number: Number, case: Case) -> &str {
        let uses_override = self.paradigm.declension() == Declension::Third
            && number == Number::Singular
            && match case {
                Case::Nominative | Case::Vocative => true,
                Case::Accusative => self.paradigm.gender() == Some(Gender::Neuter),
                _ => false,
            };
        match (&self.nominative, uses_override) {
            (Some(nominative), true) => nominative,
            _ => &self.word,
        }
    }
}
