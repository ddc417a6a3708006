use thiserror::Error;

use super::grammar::{Case, Declension};

/// Quiz lengths offered on the setup screen.
pub const LENGTH_CHOICES: [usize; 3] = [5, 10, 20];

pub const DEFAULT_LENGTH: usize = 20;

/// Cases selected when the user has not chosen any.
pub const DEFAULT_CASES: [Case; 5] = [
    Case::Nominative,
    Case::Accusative,
    Case::Genitive,
    Case::Dative,
    Case::Ablative,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("select at least one declension")]
    NoDeclensions,

    #[error("select at least one case")]
    NoCases,

    #[error("quiz length must be at least 1")]
    ZeroLength,
}

/// What a quiz session asks for.
///
/// Both selections are non-empty and free of duplicates; their order is the
/// order the user gave, which the option samplers iterate in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    declensions: Vec<Declension>,
    cases: Vec<Case>,
    length: usize,
}

impl QuizSettings {
    pub fn new(
        declensions: impl IntoIterator<Item = Declension>,
        cases: impl IntoIterator<Item = Case>,
        length: usize,
    ) -> Result<Self, SettingsError> {
        let declensions = dedup(declensions);
        let cases = dedup(cases);

        if declensions.is_empty() {
            return Err(SettingsError::NoDeclensions);
        }
        if cases.is_empty() {
            return Err(SettingsError::NoCases);
        }
        if length == 0 {
            return Err(SettingsError::ZeroLength);
        }

        Ok(Self {
            declensions,
            cases,
            length,
        })
    }

    pub fn declensions(&self) -> &[Declension] {
        &self.declensions
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            declensions: vec![Declension::First],
            cases: DEFAULT_CASES.to_vec(),
            length: DEFAULT_LENGTH,
        }
    }
}

fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_selections() {
        assert_eq!(
            QuizSettings::new([], [Case::Dative], 5),
            Err(SettingsError::NoDeclensions)
        );
        assert_eq!(
            QuizSettings::new([Declension::First], [], 5),
            Err(SettingsError::NoCases)
        );
        assert_eq!(
            QuizSettings::new([Declension::First], [Case::Dative], 0),
            Err(SettingsError::ZeroLength)
        );
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let settings = QuizSettings::new(
            [Declension::Third, Declension::First, Declension::Third],
            [Case::Ablative, Case::Nominative, Case::Ablative],
            10,
        )
        .unwrap();
        assert_eq!(settings.declensions(), &[Declension::Third, Declension::First]);
        assert_eq!(settings.cases(), &[Case::Ablative, Case::Nominative]);
        assert_eq!(settings.length(), 10);
    }

    #[test]
    fn test_default_matches_setup_screen() {
        let settings = QuizSettings::default();
        assert_eq!(settings.declensions(), &[Declension::First]);
        assert_eq!(settings.cases(), &DEFAULT_CASES);
        assert_eq!(settings.length(), 20);
    }
}
