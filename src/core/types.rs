//! Common types used across the library

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Field name carrying the country identifier in a dataset record.
pub const COUNTRY_CODE_FIELD: &str = "alpha3";

/// Field name carrying the canonical display name in a dataset record.
pub const DISPLAY_NAME_FIELD: &str = "name";

/// Width of a language-code field name in a dataset record.
///
/// Any non-reserved field name of this length is treated as a language
/// code; the rule is structural, not an enumerated list.
pub const LANGUAGE_CODE_LEN: usize = 2;

/// One country's translations across languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Country identifier (e.g., "can")
    pub code: String,
    /// Canonical display name (e.g., "Canada")
    pub name: String,
    /// Language code -> translated country name
    pub translations: HashMap<String, String>,
}

impl CountryRecord {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Language codes with a translation, in no particular order
    pub fn languages(&self) -> Vec<String> {
        self.translations.keys().cloned().collect()
    }
}

/// Result of a translation lookup
///
/// Soft misses are values, not errors: callers branch on the variant
/// instead of catching failures, and an empty translated string stays
/// distinguishable from "no data".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// A translated country name
    Found(String),
    /// The backend has no data for this country
    UnknownCountry,
    /// The country is known but has no entry for this language
    NotAvailable,
}

impl Translation {
    /// The translated string, if the lookup hit
    pub fn found(&self) -> Option<&str> {
        match self {
            Translation::Found(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Translation::Found(_))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Found(name) => f.write_str(name),
            Translation::UnknownCountry => f.write_str("Unknown country"),
            Translation::NotAvailable => {
                f.write_str("Translation not available for this language")
            }
        }
    }
}
