use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use super::table::EndingTable;
use crate::models::{Case, Declension, Gender, Number, Paradigm, WordEntry};

/// Reference dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("wordref.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the reference data in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Bundled,
    File(PathBuf),
    /// Nothing could be loaded; every lookup is not applicable.
    Fallback,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Bundled => f.write_str("bundled dataset"),
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Fallback => f.write_str("empty fallback"),
        }
    }
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    declensions: HashMap<String, Value>,
    #[serde(default)]
    words: HashMap<String, Vec<Value>>,
}

#[derive(Deserialize)]
struct RawWord {
    word: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    nom: Option<String>,
}

/// Ending tables and word catalogs, immutable once loaded.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    endings: EndingTable,
    words: HashMap<Declension, Vec<WordEntry>>,
    source: DataSource,
}

impl ReferenceData {
    /// Empty tables, flagged as [`DataSource::Fallback`].
    pub fn empty() -> Self {
        Self {
            endings: EndingTable::default(),
            words: HashMap::new(),
            source: DataSource::Fallback,
        }
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Self {
        match Self::parse(BUNDLED_DATASET, DataSource::Bundled) {
            Ok(data) => data,
            Err(err) => {
                warn!("bundled reference data is invalid, using empty tables: {err}");
                Self::empty()
            }
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::parse(json, DataSource::Bundled)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, DataSource::File(path.to_path_buf()))
    }

    /// Loads `path` when given, the bundled dataset otherwise.
    ///
    /// A file that cannot be read or parsed is replaced by empty tables.
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let data = match path {
            Some(path) => Self::from_path(path).unwrap_or_else(|err| {
                warn!("{err}; continuing with empty reference data");
                Self::empty()
            }),
            None => Self::bundled(),
        };
        info!(
            source = %data.source,
            words = data.words.values().map(Vec::len).sum::<usize>(),
            "reference data ready"
        );
        data
    }

    fn parse(json: &str, source: DataSource) -> Result<Self, LoadError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let endings = EndingTable::from_raw(raw.declensions);

        let mut words = HashMap::new();
        for (key, entries) in raw.words {
            let declension = match key.parse::<Declension>() {
                Ok(declension) => declension,
                Err(err) => {
                    warn!("ignoring word list `{key}`: {err}");
                    continue;
                }
            };
            let entries: Vec<WordEntry> = entries
                .into_iter()
                .filter_map(|entry| word_entry(declension, entry))
                .collect();
            words.insert(declension, entries);
        }

        Ok(Self {
            endings,
            words,
            source,
        })
    }

    pub fn endings(&self) -> &EndingTable {
        &self.endings
    }

    /// Example words of `declension`; empty when the catalog has none.
    pub fn words(&self, declension: Declension) -> &[WordEntry] {
        self.words
            .get(&declension)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn resolve_ending(&self, paradigm: &Paradigm, number: Number, case: Case) -> Option<&str> {
        self.endings.resolve(paradigm, number, case)
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::bundled()
    }
}

fn word_entry(declension: Declension, value: Value) -> Option<WordEntry> {
    let raw: RawWord = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("skipping malformed {declension} word: {err}");
            return None;
        }
    };

    let kind = raw.kind.as_deref();
    let paradigm = match declension {
        Declension::First => Paradigm::First,
        Declension::Second => Paradigm::Second { gender: raw.gender },
        Declension::Third => Paradigm::Third {
            gender: raw.gender,
            stem: kind.and_then(|kind| parse_type(declension, &raw.word, kind)),
        },
        Declension::Fourth => Paradigm::Fourth {
            kind: kind.and_then(|kind| parse_type(declension, &raw.word, kind)),
        },
        Declension::Fifth => Paradigm::Fifth {
            kind: kind.and_then(|kind| parse_type(declension, &raw.word, kind)),
        },
    };

    Some(WordEntry {
        word: raw.word,
        paradigm,
        nominative: raw.nom,
    })
}

fn parse_type<T: DeserializeOwned>(declension: Declension, word: &str, kind: &str) -> Option<T> {
    match serde_json::from_value(Value::String(kind.to_string())) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("word `{word}`: `{kind}` is not a {declension} type");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FourthKind, Stem};

    #[test]
    fn test_bundled_dataset_loads() {
        let data = ReferenceData::bundled();
        assert_eq!(data.source(), &DataSource::Bundled);
        assert!(!data.is_fallback());
        for declension in Declension::ALL {
            assert!(data.endings().has_declension(declension));
            assert!(!data.words(declension).is_empty());
        }
    }

    #[test]
    fn test_bundled_spot_checks() {
        let data = ReferenceData::bundled();
        assert_eq!(
            data.resolve_ending(&Paradigm::First, Number::Singular, Case::Nominative),
            Some("a")
        );
        assert_eq!(
            data.resolve_ending(&Paradigm::First, Number::Plural, Case::Genitive),
            Some("ārum")
        );
        let mixed = Paradigm::Third {
            gender: Some(Gender::Feminine),
            stem: Some(Stem::Mixed),
        };
        assert_eq!(
            data.resolve_ending(&mixed, Number::Plural, Case::Genitive),
            Some("ium")
        );
        let neuter_u = Paradigm::Fourth {
            kind: Some(FourthKind::U),
        };
        assert_eq!(
            data.resolve_ending(&neuter_u, Number::Plural, Case::Nominative),
            Some("ua")
        );
        assert_eq!(
            data.resolve_ending(
                &Paradigm::unspecified(Declension::Fourth),
                Number::Singular,
                Case::Locative
            ),
            None
        );
    }

    #[test]
    fn test_word_entries_get_typed_paradigms() {
        let data = ReferenceData::from_json_str(
            r#"{
                "declensions": {},
                "words": {
                    "3": [
                        { "word": "rēg", "gender": "Masculine", "type": "Pure", "nom": "rēx" },
                        { "word": "urb", "gender": "Feminine", "type": "us" },
                        { "gender": "Neuter" }
                    ],
                    "4": [ { "word": "corn", "gender": "Neuter", "type": "u" } ]
                }
            }"#,
        )
        .unwrap();

        let third = data.words(Declension::Third);
        assert_eq!(third.len(), 2);
        assert_eq!(
            third[0].paradigm,
            Paradigm::Third {
                gender: Some(Gender::Masculine),
                stem: Some(Stem::Pure)
            }
        );
        assert_eq!(third[0].nominative.as_deref(), Some("rēx"));
        // A 4th declension type on a 3rd declension noun is dropped.
        assert_eq!(
            third[1].paradigm,
            Paradigm::Third {
                gender: Some(Gender::Feminine),
                stem: None
            }
        );

        assert_eq!(
            data.words(Declension::Fourth)[0].paradigm,
            Paradigm::Fourth {
                kind: Some(FourthKind::U)
            }
        );
        assert!(data.words(Declension::First).is_empty());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let data = ReferenceData::load_or_fallback(Some(Path::new("/nonexistent/wordref.json")));
        assert!(data.is_fallback());
        assert!(data.endings().is_empty());
        assert_eq!(
            data.resolve_ending(&Paradigm::First, Number::Singular, Case::Nominative),
            None
        );
    }

    #[test]
    fn test_from_path_reports_errors() {
        let err = ReferenceData::from_path("/nonexistent/wordref.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));

        let err = ReferenceData::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
