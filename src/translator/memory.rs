//! Hand-coded in-memory backend
//!
//! Covers the single country "can" with a fixed set of language
//! translations. Serves as the smallest possible implementation of the
//! [`Translator`] contract and as a dependency-free test fixture.

use std::collections::HashMap;

use crate::core::{CountryRecord, Translation};
use crate::translator::Translator;

/// Country code served by [`StaticTranslator`].
pub const CANADA: &str = "can";

/// Backend backed by a literal single-country dataset
pub struct StaticTranslator {
    record: CountryRecord,
}

impl StaticTranslator {
    /// Build the literal dataset. Infallible: there is no resource to load.
    pub fn new() -> Self {
        let translations: HashMap<String, String> = [
            ("de", "Kanada"),
            ("en", "Canada"),
            ("zh", "加拿大"),
            ("es", "Canad\u{00E1}"),
            ("ko", "캐나다"),
        ]
        .into_iter()
        .map(|(language, name)| (language.to_string(), name.to_string()))
        .collect();

        Self {
            record: CountryRecord {
                code: CANADA.to_string(),
                name: "Canada".to_string(),
                translations,
            },
        }
    }
}

impl Default for StaticTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for StaticTranslator {
    fn countries(&self) -> Vec<String> {
        vec![self.record.code.clone()]
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        if country == self.record.code {
            self.record.languages()
        } else {
            Vec::new()
        }
    }

    // A single-country backend has no separate unknown-country signal:
    // any miss, country or language, is NotAvailable.
    fn translate(&self, country: &str, language: &str) -> Translation {
        if country != self.record.code {
            return Translation::NotAvailable;
        }
        match self.record.translations.get(language) {
            Some(name) => Translation::Found(name.clone()),
            None => Translation::NotAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_language() {
        let translator = StaticTranslator::new();
        assert_eq!(
            translator.translate("can", "en"),
            Translation::Found("Canada".to_string())
        );
        assert_eq!(
            translator.translate("can", "de"),
            Translation::Found("Kanada".to_string())
        );
    }

    #[test]
    fn test_translate_unknown_language() {
        let translator = StaticTranslator::new();
        assert_eq!(translator.translate("can", "fr"), Translation::NotAvailable);
    }

    #[test]
    fn test_translate_unknown_country() {
        let translator = StaticTranslator::new();
        assert_eq!(translator.translate("usa", "en"), Translation::NotAvailable);
    }

    #[test]
    fn test_countries() {
        let translator = StaticTranslator::new();
        assert_eq!(translator.countries(), vec!["can".to_string()]);
    }

    #[test]
    fn test_country_languages() {
        let translator = StaticTranslator::new();

        let mut languages = translator.country_languages("can");
        languages.sort();
        assert_eq!(languages, vec!["de", "en", "es", "ko", "zh"]);

        assert!(translator.country_languages("usa").is_empty());
    }
}
