//! Core module - shared types, errors, and dataset field conventions

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
    CountryRecord, Translation, COUNTRY_CODE_FIELD, DISPLAY_NAME_FIELD, LANGUAGE_CODE_LEN,
};
