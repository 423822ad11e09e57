//! Lookup backends for country-name translations
//!
//! Two interchangeable implementations of the [`Translator`] contract:
//! - [`StaticTranslator`]: a hand-coded dataset covering a single country
//! - [`JsonTranslator`]: a dataset parsed from a JSON resource at construction
//!
//! Every backend is read-only once constructed, so a shared reference can be
//! queried from any number of threads without coordination. Constructing a
//! fresh backend is the unit of "reload".

mod json;
mod memory;

pub use json::JsonTranslator;
pub use memory::StaticTranslator;

use crate::core::Translation;

/// Contract every lookup backend satisfies
///
/// All operations are pure reads against state built at construction;
/// repeated calls with the same arguments return the same results.
pub trait Translator {
    /// All country codes this backend knows about, without duplicates,
    /// in no particular order.
    fn countries(&self) -> Vec<String>;

    /// The language codes available for `country`.
    ///
    /// An unknown country yields an empty list, never an error.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// The name of `country` in `language`, or the applicable soft-miss
    /// marker.
    fn translate(&self, country: &str, language: &str) -> Translation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_backends() -> Vec<Box<dyn Translator>> {
        vec![
            Box::new(StaticTranslator::new()),
            Box::new(JsonTranslator::new().unwrap()),
        ]
    }

    #[test]
    fn test_unknown_country_is_empty_everywhere() {
        for backend in all_backends() {
            assert!(backend.country_languages("zzz").is_empty());
            assert!(!backend.translate("zzz", "en").is_found());
        }
    }

    #[test]
    fn test_countries_have_no_duplicates() {
        for backend in all_backends() {
            let countries = backend.countries();
            let distinct: HashSet<_> = countries.iter().cloned().collect();
            assert_eq!(distinct.len(), countries.len());
            assert!(!countries.is_empty());
        }
    }

    #[test]
    fn test_listed_languages_all_translate() {
        for backend in all_backends() {
            for country in backend.countries() {
                let languages = backend.country_languages(&country);
                assert!(!languages.is_empty());
                for language in &languages {
                    assert!(backend.translate(&country, language).is_found());
                }
                // and nothing outside the listed set translates
                assert!(!backend.translate(&country, "qq").is_found());
            }
        }
    }

    #[test]
    fn test_queries_are_idempotent() {
        for backend in all_backends() {
            assert_eq!(backend.countries(), backend.countries());
            assert_eq!(
                backend.country_languages("can"),
                backend.country_languages("can")
            );
            assert_eq!(
                backend.translate("can", "en"),
                backend.translate("can", "en")
            );
            assert_eq!(
                backend.translate("zzz", "en"),
                backend.translate("zzz", "en")
            );
        }
    }
}
