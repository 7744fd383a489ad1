//! Markup builders for dictionary page fixtures.

/// Wrap body markup in a full page.
pub fn page(body: &str) -> String {
    format!("<!DOCTYPE html>\n<html>\n<head><title>page</title></head>\n<body>\n{body}\n</body>\n</html>\n")
}

/// An entry container holding `inner`.
pub fn entry(inner: &str) -> String {
    format!("<span class=\"ldoceEntry Entry\">\n{inner}\n</span>")
}

/// A sense container holding `inner`.
pub fn sense(inner: &str) -> String {
    format!("<span class=\"Sense\">\n{inner}\n</span>")
}

/// A single element with the given class.
pub fn field(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{text}</span>")
}

/// Page for "run": one verb entry with one plain sense.
pub fn run_page() -> String {
    page(&entry(&format!(
        "{}{}{}",
        field("PRON", "rʌn"),
        field("POS", "v"),
        sense(&field("DEF", "to move quickly"))
    )))
}

/// Expected import row for [`run_page`].
pub fn run_row() -> &'static str {
    concat!(
        "run\t\"",
        r#"<div><div><div><div style=""text-align: center;"">run</div></div>"#,
        r##"<hr /><div style=""text-align: center;""><font color=""#108040"">v</font>&nbsp;/rʌn/</div>"##,
        r#"<div style=""text-align: left;"">1. to move quickly</div>"#,
        r#"<div style=""text-align: left;"">&nbsp;</div>"#,
        "</div></div>\"",
    )
}
