//! Extractor for LDOCE-style dictionary pages.
//!
//! Elements are located by class name only:
//!
//! ```html
//! <span class="ldoceEntry Entry">
//!   <span class="PRON">rʌn</span>
//!   <span class="POS">verb</span>
//!   <span class="Sense">
//!     <span class="DEF">to move quickly</span>
//!     <span class="SYN">= sprint</span>
//!     <span class="EXAMPLE">She ran for the bus.</span>
//!   </span>
//! </span>
//! ```
//!
//! Missing required fields drop the entry or sense they belong to. Missing
//! optional fields are left out. Nothing in the page content is an error.

use crate::error::{DictError, Result};
use crate::types::{strip_label, EntryRecord, LabelPrefixes, SenseRecord, WordRecord};
use scraper::{ElementRef, Html, Selector};

/// Class names of the dictionary page schema. Case-sensitive; a name with
/// several tokens matches elements carrying all of them.
pub mod classes {
    pub const ENTRY: &str = "ldoceEntry Entry";
    pub const POS: &str = "POS";
    pub const PRON: &str = "PRON";
    pub const AMERICAN_PRON: &str = "AMEVARPRON";
    pub const SENSE: &str = "Sense";
    pub const DEF: &str = "DEF";
    pub const REF_HEADWORD: &str = "REFHWD";
    pub const RELATED: &str = "RELATEDWD";
    pub const SYN: &str = "SYN";
    pub const OPP: &str = "OPP";
    pub const EXAMPLE: &str = "EXAMPLE";
}

struct Selectors {
    entry: Selector,
    pos: Selector,
    pron: Selector,
    american_pron: Selector,
    sense: Selector,
    def: Selector,
    ref_headword: Selector,
    related: Selector,
    syn: Selector,
    opp: Selector,
    example: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            entry: class_selector(classes::ENTRY)?,
            pos: class_selector(classes::POS)?,
            pron: class_selector(classes::PRON)?,
            american_pron: class_selector(classes::AMERICAN_PRON)?,
            sense: class_selector(classes::SENSE)?,
            def: class_selector(classes::DEF)?,
            ref_headword: class_selector(classes::REF_HEADWORD)?,
            related: class_selector(classes::RELATED)?,
            syn: class_selector(classes::SYN)?,
            opp: class_selector(classes::OPP)?,
            example: class_selector(classes::EXAMPLE)?,
        })
    }
}

/// Build a CSS selector matching every token of a class attribute value,
/// e.g. `"ldoceEntry Entry"` becomes `.ldoceEntry.Entry`.
pub fn class_selector(class: &str) -> Result<Selector> {
    let css: String = class
        .split_whitespace()
        .map(|token| format!(".{token}"))
        .collect();

    Selector::parse(&css).map_err(|e| DictError::InvalidSelector {
        selector: css.clone(),
        message: e.to_string(),
    })
}

/// Pulls [`WordRecord`]s out of parsed dictionary pages.
///
/// Holds only compiled selectors and prefix lengths, so one instance can be
/// shared across any number of documents.
pub struct Extractor {
    selectors: Selectors,
    prefixes: LabelPrefixes,
}

impl Extractor {
    /// Create an extractor with the default label prefix lengths.
    pub fn new() -> Result<Self> {
        Self::with_prefixes(LabelPrefixes::default())
    }

    /// Create an extractor stripping the given number of label characters.
    pub fn with_prefixes(prefixes: LabelPrefixes) -> Result<Self> {
        Ok(Self {
            selectors: Selectors::compile()?,
            prefixes,
        })
    }

    /// Whether the page contains at least one entry container.
    pub fn has_entries(&self, document: &Html) -> bool {
        document.select(&self.selectors.entry).next().is_some()
    }

    /// Extract every qualifying entry of `document` under the given word.
    pub fn extract(&self, word: &str, document: &Html) -> WordRecord {
        let entries = document
            .select(&self.selectors.entry)
            .filter_map(|node| self.extract_entry(node))
            .collect();

        WordRecord {
            word: word.to_string(),
            entries,
        }
    }

    fn extract_entry(&self, node: ElementRef<'_>) -> Option<EntryRecord> {
        let pron = self.pronunciation(node);
        let pos = find_text(node, &self.selectors.pos)?;
        let senses = node
            .select(&self.selectors.sense)
            .filter_map(|sense| self.extract_sense(sense))
            .collect();

        Some(EntryRecord { pron, pos, senses })
    }

    /// `/base/`, followed by ` /american/` when the variant exists.
    fn pronunciation(&self, node: ElementRef<'_>) -> Option<String> {
        let base = find_text(node, &self.selectors.pron)?;
        let pron = match find_text(node, &self.selectors.american_pron) {
            Some(american) => format!("/{base}/ /{american}/"),
            None => format!("/{base}/"),
        };
        Some(pron)
    }

    fn extract_sense(&self, node: ElementRef<'_>) -> Option<SenseRecord> {
        let definition = find_text(node, &self.selectors.def)
            .or_else(|| find_text(node, &self.selectors.ref_headword))?;

        Some(SenseRecord {
            definition,
            rel: find_labelled(node, &self.selectors.related, self.prefixes.related),
            syn: find_labelled(node, &self.selectors.syn, self.prefixes.synonym),
            opp: find_labelled(node, &self.selectors.opp, self.prefixes.opposite),
            examples: node
                .select(&self.selectors.example)
                .map(node_text)
                .collect(),
        })
    }
}

/// Extract `document` with a default [`Extractor`].
pub fn extract(word: &str, document: &Html) -> Result<WordRecord> {
    Ok(Extractor::new()?.extract(word, document))
}

/// All descendant text of `node`, trimmed.
fn node_text(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector`, if it has any.
fn find_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(node_text)
        .filter(|text| !text.is_empty())
}

fn find_labelled(scope: ElementRef<'_>, selector: &Selector, prefix: usize) -> Option<String> {
    find_text(scope, selector)
        .map(|text| strip_label(&text, prefix).to_string())
        .filter(|text| !text.is_empty())
}
