//! Country-name translation library
//!
//! Answers one question: what is this country called in that language?
//! The crate exposes a small lookup contract ([`Translator`]) satisfied by
//! interchangeable read-only backends:
//! - [`StaticTranslator`]: a hand-coded dataset for a single country
//! - [`JsonTranslator`]: a dataset parsed from a JSON resource when the
//!   backend is constructed
//!
//! Datasets are immutable after construction, so every query is a pure
//! in-memory read and backends can be shared freely across threads.

pub mod core;
pub mod translator;

pub use crate::core::{CountryRecord, Error, Result, Translation};
pub use crate::translator::{JsonTranslator, StaticTranslator, Translator};
