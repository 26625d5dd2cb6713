//! Terminal rendering of documents and matches

use colored::Colorize;
use std::fmt::Write as _;

use crate::selector::Match;
use crate::store::{DocumentStore, GuidanceDocument};

/// Heading line followed by the document body
pub fn render_document(doc: &GuidanceDocument) -> String {
    let mut out = String::new();
    let heading = match doc.title() {
        Some(title) => format!("== {} ({})", doc.topic(), title),
        None => format!("== {}", doc.topic()),
    };
    let _ = writeln!(out, "{}", heading.bold().cyan());
    let _ = writeln!(out, "{}", doc.body());
    out
}

/// Matched documents separated by blank lines
pub fn render_matches(matches: &[Match<'_>]) -> String {
    matches
        .iter()
        .map(|m| render_document(m.document))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per document: topic, tags, description
pub fn render_list(store: &DocumentStore) -> String {
    let width = store.topics().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for doc in store {
        let tags = doc.tags().iter().cloned().collect::<Vec<_>>().join(", ");
        let _ = write!(out, "{:<width$}  ", doc.topic(), width = width);
        let _ = write!(out, "{}", format!("[{}]", tags).dimmed());
        if let Some(description) = doc.description() {
            let _ = write!(out, "  {}", description);
        }
        out.push('\n');
    }
    out
}
