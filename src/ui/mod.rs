//! Text formatting for the interactive CLI.
//!
//! Pure string builders: headers, titled sections with word wrap, and
//! pretty-printers for the proof artifacts. The CLI binary prints what
//! these return.

use crate::proof::{DocumentProof, LocationLog};

/// Width of header banners.
const HEADER_WIDTH: usize = 50;

/// Default wrap width for section bodies.
pub const SECTION_WIDTH: usize = 70;

/// Formats a banner like:
///
/// ```text
/// ==================================================
///              INTELLIGENT EXCUSE GENERATOR
/// ==================================================
/// ```
pub fn format_header(title: &str) -> String {
    let bar = "=".repeat(HEADER_WIDTH);
    format!("\n{}\n{:^width$}\n{}", bar, title, bar, width = HEADER_WIDTH)
}

/// Formats a titled section with the body word-wrapped to `width` columns
/// and indented two spaces.
pub fn format_section(title: &str, content: &str, width: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n■ {} ■\n", title.to_uppercase()));
    output.push_str(&"-".repeat(title.len() * 2));
    output.push('\n');

    for line in wrap_text(content, width) {
        output.push_str(&format!("  {}\n", line));
    }

    output
}

/// Greedy word wrap. Words longer than `width` get a line of their own
/// rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Renders a document proof as indented key/value lines.
pub fn format_document(doc: &DocumentProof) -> String {
    format!(
        "  Title: {}\n  Date: {}\n  Name: {}\n  Details: {}\n  Signature: {}",
        doc.title, doc.date, doc.name, doc.details, doc.signature
    )
}

/// Renders a location log as indented key/value lines.
pub fn format_location(log: &LocationLog) -> String {
    format!(
        "  Timestamp: {}\n  Latitude: {}\n  Longitude: {}\n  Address: {}",
        log.timestamp, log.latitude, log.longitude, log.address
    )
}
