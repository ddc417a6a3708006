//! Ending tables and the ending resolver.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::models::{Case, Declension, FifthKind, FourthKind, Gender, Number, Paradigm, Stem};

type CaseEndings = HashMap<Case, String>;
type ByNumber<T> = HashMap<Number, T>;
type ByGender<T> = HashMap<Gender, T>;

/// Declension → (type / number / gender / case) → ending.
///
/// A missing declension, type, number, gender or case means the form does not
/// exist. An empty string is a real ending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndingTable {
    first: Option<ByNumber<CaseEndings>>,
    second: Option<ByNumber<ByGender<CaseEndings>>>,
    third: Option<HashMap<Stem, ByNumber<ByGender<CaseEndings>>>>,
    fourth: Option<HashMap<FourthKind, ByNumber<CaseEndings>>>,
    fifth: Option<HashMap<FifthKind, ByNumber<CaseEndings>>>,
}

impl EndingTable {
    /// Builds the table from the raw `declensions` object of a dataset.
    ///
    /// Each declension subtree is decoded on its own; one that does not have
    /// the expected shape is dropped with a warning and the others are kept.
    pub(crate) fn from_raw(raw: HashMap<String, Value>) -> Self {
        let mut table = Self::default();

        for (key, subtree) in raw {
            let declension = match key.parse::<Declension>() {
                Ok(declension) => declension,
                Err(err) => {
                    warn!("ignoring declension table `{key}`: {err}");
                    continue;
                }
            };

            match declension {
                Declension::First => table.first = decode(declension, subtree),
                Declension::Second => table.second = decode(declension, subtree),
                Declension::Third => table.third = decode(declension, subtree),
                Declension::Fourth => table.fourth = decode(declension, subtree),
                Declension::Fifth => table.fifth = decode(declension, subtree),
            }
        }

        table
    }

    /// Looks up the ending of `paradigm` in `number` and `case`.
    ///
    /// Unspecified sub-attributes default to Masculine (2nd, 3rd), Pure (3rd),
    /// `us` (4th) and `ies` (5th). `None` means the form is not applicable.
    pub fn resolve(&self, paradigm: &Paradigm, number: Number, case: Case) -> Option<&str> {
        let ending = match *paradigm {
            Paradigm::First => self.first.as_ref()?.get(&number)?.get(&case),
            Paradigm::Second { gender } => self
                .second
                .as_ref()?
                .get(&number)?
                .get(&gender.unwrap_or(Gender::Masculine))?
                .get(&case),
            Paradigm::Third { gender, stem } => self
                .third
                .as_ref()?
                .get(&stem.unwrap_or(Stem::Pure))?
                .get(&number)?
                .get(&gender.unwrap_or(Gender::Masculine))?
                .get(&case),
            Paradigm::Fourth { kind } => self
                .fourth
                .as_ref()?
                .get(&kind.unwrap_or(FourthKind::Us))?
                .get(&number)?
                .get(&case),
            Paradigm::Fifth { kind } => self
                .fifth
                .as_ref()?
                .get(&kind.unwrap_or(FifthKind::Ies))?
                .get(&number)?
                .get(&case),
        };

        ending.map(String::as_str)
    }

    /// Whether any ending of `declension` is present.
    pub fn has_declension(&self, declension: Declension) -> bool {
        match declension {
            Declension::First => self.first.is_some(),
            Declension::Second => self.second.is_some(),
            Declension::Third => self.third.is_some(),
            Declension::Fourth => self.fourth.is_some(),
            Declension::Fifth => self.fifth.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Declension::ALL
            .into_iter()
            .all(|declension| !self.has_declension(declension))
    }
}

fn decode<T: DeserializeOwned>(declension: Declension, subtree: Value) -> Option<T> {
    match serde_json::from_value(subtree) {
        Ok(table) => Some(table),
        Err(err) => {
            warn!("dropping malformed {declension} table: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> EndingTable {
        EndingTable::from_raw(raw(json!({
            "1": {
                "Singular": { "Nominative": "a", "Genitive": "ae" },
                "Plural": { "Nominative": "ae" }
            },
            "2": {
                "Singular": {
                    "Masculine": { "Nominative": "us" },
                    "Neuter": { "Nominative": "um" }
                }
            },
            "3": {
                "Pure": { "Singular": { "Masculine": { "Nominative": "", "Genitive": "is" } } },
                "Mixed": { "Plural": { "Feminine": { "Genitive": "ium" } } }
            },
            "4": {
                "us": { "Singular": { "Genitive": "ūs" } },
                "u": { "Singular": { "Genitive": "ūs", "Nominative": "ū" } }
            },
            "5": {
                "ies": { "Singular": { "Genitive": "ēī" } },
                "es": { "Singular": { "Genitive": "eī" } }
            }
        })))
    }

    #[test]
    fn test_first_declension_lookup() {
        let table = sample();
        assert_eq!(
            table.resolve(&Paradigm::First, Number::Singular, Case::Nominative),
            Some("a")
        );
        assert_eq!(
            table.resolve(&Paradigm::First, Number::Plural, Case::Genitive),
            None
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = sample();
        let first = table.resolve(&Paradigm::First, Number::Singular, Case::Nominative);
        for _ in 0..10 {
            assert_eq!(
                table.resolve(&Paradigm::First, Number::Singular, Case::Nominative),
                first
            );
        }
    }

    #[test]
    fn test_defaults_for_unspecified_attributes() {
        let table = sample();
        assert_eq!(
            table.resolve(
                &Paradigm::unspecified(Declension::Second),
                Number::Singular,
                Case::Nominative
            ),
            Some("us")
        );
        assert_eq!(
            table.resolve(
                &Paradigm::unspecified(Declension::Third),
                Number::Singular,
                Case::Genitive
            ),
            Some("is")
        );
        assert_eq!(
            table.resolve(
                &Paradigm::unspecified(Declension::Fifth),
                Number::Singular,
                Case::Genitive
            ),
            Some("ēī")
        );
        // Defaults to `us`, which has no nominative entry here.
        assert_eq!(
            table.resolve(
                &Paradigm::unspecified(Declension::Fourth),
                Number::Singular,
                Case::Nominative
            ),
            None
        );
    }

    #[test]
    fn test_specified_attributes() {
        let table = sample();
        let neuter = Paradigm::Second {
            gender: Some(Gender::Neuter),
        };
        assert_eq!(
            table.resolve(&neuter, Number::Singular, Case::Nominative),
            Some("um")
        );

        let mixed = Paradigm::Third {
            gender: Some(Gender::Feminine),
            stem: Some(Stem::Mixed),
        };
        assert_eq!(
            table.resolve(&mixed, Number::Plural, Case::Genitive),
            Some("ium")
        );

        let es = Paradigm::Fifth {
            kind: Some(FifthKind::Es),
        };
        assert_eq!(table.resolve(&es, Number::Singular, Case::Genitive), Some("eī"));
    }

    #[test]
    fn test_empty_ending_is_not_absence() {
        let table = sample();
        let third = Paradigm::Third {
            gender: Some(Gender::Masculine),
            stem: Some(Stem::Pure),
        };
        assert_eq!(
            table.resolve(&third, Number::Singular, Case::Nominative),
            Some("")
        );
        assert_eq!(table.resolve(&third, Number::Singular, Case::Locative), None);
    }

    #[test]
    fn test_missing_gender_is_not_applicable() {
        let table = sample();
        let feminine = Paradigm::Second {
            gender: Some(Gender::Feminine),
        };
        assert_eq!(
            table.resolve(&feminine, Number::Singular, Case::Nominative),
            None
        );
    }

    #[test]
    fn test_malformed_declension_is_dropped() {
        let table = EndingTable::from_raw(raw(json!({
            "1": { "Singular": { "Nominative": "a" } },
            "2": { "Singular": "us" },
            "3": { "Pure": { "Singular": { "Masculine": { "Instrumental": "e" } } } },
            "7": { "Singular": { "Nominative": "x" } }
        })));

        assert!(table.has_declension(Declension::First));
        assert!(!table.has_declension(Declension::Second));
        assert!(!table.has_declension(Declension::Third));
        assert_eq!(
            table.resolve(
                &Paradigm::unspecified(Declension::Second),
                Number::Singular,
                Case::Nominative
            ),
            None
        );
    }

    #[test]
    fn test_empty_table() {
        let table = EndingTable::default();
        assert!(table.is_empty());
        for declension in Declension::ALL {
            assert_eq!(
                table.resolve(
                    &Paradigm::unspecified(declension),
                    Number::Singular,
                    Case::Nominative
                ),
                None
            );
        }
    }
}
