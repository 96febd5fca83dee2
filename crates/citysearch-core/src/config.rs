// crates/citysearch-core/src/config.rs
use crate::text::{fold_key, lowercase_key};
use serde::{Deserialize, Serialize};

/// How names and queries are normalised before indexing and matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyNormalization {
    /// Unicode lowercase only.
    #[default]
    Lowercase,
    /// Transliterate to ASCII, then lowercase ("Zürich" matches "zur").
    AsciiFolded,
}

impl KeyNormalization {
    pub fn key(self, s: &str) -> String {
        match self {
            KeyNormalization::Lowercase => lowercase_key(s),
            KeyNormalization::AsciiFolded => fold_key(s),
        }
    }
}

/// How strictly a catalog is checked at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Ids must be exactly the positions `0..n` and big cities must form a
    /// contiguous prefix.
    #[default]
    Strict,
    /// Only duplicate ids are rejected. The default response then takes
    /// whatever big-city prefix the catalog happens to have.
    Lenient,
}

/// Engine construction options.
///
/// ```rust
/// use citysearch_core::{EngineConfig, KeyNormalization, Validation};
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "key_normalization": "ascii_folded" }"#)?;
/// assert_eq!(config.key_normalization, KeyNormalization::AsciiFolded);
/// assert_eq!(config.validation, Validation::Strict);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub key_normalization: KeyNormalization,
    pub validation: Validation,
}

impl EngineConfig {
    pub fn with_key_normalization(mut self, key_normalization: KeyNormalization) -> Self {
        self.key_normalization = key_normalization;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}
