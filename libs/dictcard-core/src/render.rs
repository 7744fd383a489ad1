//! Flashcard HTML rendering.
//!
//! The layout is fixed: the word centred at the top, then per entry a rule,
//! the part of speech with its pronunciation, and the numbered senses with
//! their examples.

use crate::types::{EntryRecord, SenseRecord, WordRecord};

const CENTER: &str = r#"<div style="text-align: center;">"#;
const LEFT: &str = r#"<div style="text-align: left;">"#;
const POS_COLOR: &str = "#108040";
const LABEL_COLOR: &str = "#0000ff";
const EXAMPLE_COLOR: &str = "#999999";

/// Render a word as a single line of flashcard HTML.
///
/// Text is inserted as-is. Every `\n`, whether from the layout or from
/// the record itself, is removed.
pub fn render(record: &WordRecord) -> String {
    let mut html = String::new();
    html.push_str("<div><div><div>");
    html.push_str(CENTER);
    html.push_str(&record.word);
    html.push_str("</div></div>");

    for entry in &record.entries {
        render_entry(&mut html, entry);
    }

    html.push_str("</div></div>");
    html.replace('\n', "")
}

fn render_entry(html: &mut String, entry: &EntryRecord) {
    html.push_str("<hr />");
    html.push_str(CENTER);
    html.push_str(&format!(r#"<font color="{POS_COLOR}">{}</font>"#, entry.pos));
    html.push_str("&nbsp;");
    html.push_str(entry.pron.as_deref().unwrap_or_default());
    html.push_str("</div>");

    // Numbering restarts for every entry.
    for (idx, sense) in entry.senses.iter().enumerate() {
        render_sense(html, idx + 1, sense);
    }
}

fn render_sense(html: &mut String, number: usize, sense: &SenseRecord) {
    html.push_str(LEFT);
    html.push_str(&format!("{number}. {}", sense.definition));
    for (glyph, value) in [("=", &sense.syn), ("→", &sense.rel), ("≠", &sense.opp)] {
        if let Some(value) = value {
            html.push_str(&format!(
                r#" {glyph} <font color="{LABEL_COLOR}"><b>{value}</b></font>"#
            ));
        }
    }
    html.push_str("</div>");

    if sense.examples.is_empty() {
        html.push_str(LEFT);
        html.push_str("&nbsp;</div>");
        return;
    }

    html.push_str(r#"<div><ul style="list-style-type: disc;">"#);
    for example in &sense.examples {
        html.push_str(&format!(
            r#"<li style="text-align: left;"><font color="{EXAMPLE_COLOR}">{example}</font></li>"#
        ));
    }
    html.push_str("</ul></div>");
}

/// Format the import line for a word: `word<TAB>"html"`.
///
/// Quotes inside the HTML are doubled so the field survives the importer's
/// quoted-field parsing.
pub fn format_row(record: &WordRecord) -> String {
    let html = render(record).replace('"', "\"\"");
    format!("{}\t\"{}\"", record.word, html)
}
