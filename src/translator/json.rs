//! JSON-backed lookup backend
//!
//! Parses a JSON array of country records once at construction, then serves
//! every lookup from the resulting in-memory index. A failed load or parse
//! is fatal: no partially-built backend is ever handed out.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::{
    CountryRecord, Error, Result, Translation, COUNTRY_CODE_FIELD, DISPLAY_NAME_FIELD,
    LANGUAGE_CODE_LEN,
};
use crate::translator::Translator;

/// Dataset bundled with the crate, used by [`JsonTranslator::new`].
const BUNDLED_DATASET: &str = include_str!("../../resources/countries.json");

/// Backend that serves lookups from a parsed JSON dataset
#[derive(Debug)]
pub struct JsonTranslator {
    records: HashMap<String, CountryRecord>,
}

impl JsonTranslator {
    /// Load the dataset bundled with the crate.
    pub fn new() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a dataset from a JSON string.
    ///
    /// The input must be an array of objects. Each object carries the
    /// country identifier in `alpha3` and the canonical display name in
    /// `name`; every other key of language-code width whose value is a
    /// string is a language code mapped to that language's translation.
    /// The key-width rule is structural: languages are not enumerated
    /// anywhere.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(json)?;
        let entries = data
            .as_array()
            .ok_or_else(|| Error::Dataset("expected a top-level array".to_string()))?;

        let mut records = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            let record = parse_record(index, entry)?;
            // Duplicate country codes: the later record wins, matching the
            // map-insert semantics of the reference loader.
            records.insert(record.code.clone(), record);
        }

        log::info!("Loaded translations for {} countries", records.len());

        Ok(Self { records })
    }

    /// The per-language string parsed for `country`, if present.
    ///
    /// [`Translator::translate`] resolves hits to the canonical display
    /// name instead of these values; this accessor keeps them reachable.
    pub fn translation_of(&self, country: &str, language: &str) -> Option<&str> {
        self.records
            .get(country)
            .and_then(|record| record.translations.get(language))
            .map(String::as_str)
    }
}

impl Translator for JsonTranslator {
    fn countries(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        self.records
            .get(country)
            .map(CountryRecord::languages)
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Translation {
        match self.records.get(country) {
            None => Translation::UnknownCountry,
            // A known country/language pair resolves to the canonical
            // display name, not the per-language string; see
            // `translation_of` for the parsed per-language values.
            Some(record) if record.translations.contains_key(language) => {
                Translation::Found(record.name.clone())
            }
            Some(_) => Translation::NotAvailable,
        }
    }
}

fn parse_record(index: usize, entry: &Value) -> Result<CountryRecord> {
    let fields = entry
        .as_object()
        .ok_or_else(|| Error::Dataset(format!("record {} is not an object", index)))?;

    let code = string_field(index, fields, COUNTRY_CODE_FIELD)?;
    let name = string_field(index, fields, DISPLAY_NAME_FIELD)?;

    let mut record = CountryRecord::new(code, name);
    for (key, value) in fields {
        if key == COUNTRY_CODE_FIELD || key == DISPLAY_NAME_FIELD {
            continue;
        }
        if key.len() != LANGUAGE_CODE_LEN {
            continue;
        }
        match value.as_str() {
            Some(translation) => {
                record
                    .translations
                    .insert(key.clone(), translation.to_string());
            }
            None => {
                // Language-shaped key without a string value carries no
                // translation; skip it rather than reject the record.
                log::debug!("record {} ('{}'): skipping non-string field '{}'", index, code, key);
            }
        }
    }

    Ok(record)
}

fn string_field<'a>(
    index: usize,
    fields: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a str> {
    fields.get(field).and_then(Value::as_str).ok_or_else(|| {
        Error::Dataset(format!("record {} is missing string field '{}'", index, field))
    })
}
