//! Records extracted from a dictionary page.

use serde::{Deserialize, Serialize};

/// One word page: the headword plus its entries in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub entries: Vec<EntryRecord>,
}

/// One part-of-speech group of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pron: Option<String>,
    pub pos: String,
    pub senses: Vec<SenseRecord>,
}

/// One meaning within an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseRecord {
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opp: Option<String>,
    pub examples: Vec<String>,
}

impl SenseRecord {
    /// Create a sense with only a definition.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            rel: None,
            syn: None,
            opp: None,
            examples: Vec::new(),
        }
    }
}

/// Number of characters of label glyph stripped from the front of
/// related-word, synonym and opposite text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPrefixes {
    pub related: usize,
    pub synonym: usize,
    pub opposite: usize,
}

impl Default for LabelPrefixes {
    fn default() -> Self {
        Self {
            related: 2,
            synonym: 4,
            opposite: 4,
        }
    }
}

/// Drop the first `count` characters (not bytes) of `text`.
pub fn strip_label(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}
