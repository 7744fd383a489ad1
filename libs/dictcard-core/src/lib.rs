//! Core library for turning dictionary pages into flashcards.
//!
//! Provides:
//! - Extractor for LDOCE-style dictionary HTML pages
//! - Renderer producing the flashcard back-side HTML
//! - TSV row formatting for flashcard import
//! - Shared types (WordRecord, EntryRecord, SenseRecord, LabelPrefixes)

pub mod error;
pub mod extractor;
pub mod render;
pub mod types;

pub use error::{DictError, Result};
pub use extractor::{extract, Extractor};
pub use render::{format_row, render};
pub use types::{EntryRecord, LabelPrefixes, SenseRecord, WordRecord};
