//! Guidance documents compiled into the binary

use std::path::Path;

use super::document::{DocumentSource, GuidanceDocument};
use super::loader::parse_document;
use crate::errors::LoadError;

/// (file name, content) of every bundled document
const BUILTIN_DOCUMENTS: &[(&str, &str)] = &[
    ("code-review.md", include_str!("../../guides/code-review.md")),
    ("concurrency.md", include_str!("../../guides/concurrency.md")),
    ("naming.md", include_str!("../../guides/naming.md")),
    ("refactoring.md", include_str!("../../guides/refactoring.md")),
    ("state-management.md", include_str!("../../guides/state-management.md")),
    ("testing.md", include_str!("../../guides/testing.md")),
];

/// Parse the bundled documents
pub fn documents() -> Result<Vec<GuidanceDocument>, LoadError> {
    BUILTIN_DOCUMENTS
        .iter()
        .map(|(name, content)| {
            let origin = format!("<builtin>/{}", name);
            parse_document(&origin, Path::new(name), content, DocumentSource::Builtin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_documents_parse() {
        let docs = documents().unwrap();
        assert_eq!(docs.len(), BUILTIN_DOCUMENTS.len());
        for doc in &docs {
            assert!(!doc.tags().is_empty(), "{} has no tags", doc.topic());
            assert!(doc.description().is_some(), "{} has no description", doc.topic());
            assert_eq!(doc.source(), &DocumentSource::Builtin);
        }
    }

    #[test]
    fn test_builtin_topics_match_file_names() {
        for (doc, (name, _)) in documents().unwrap().iter().zip(BUILTIN_DOCUMENTS) {
            assert_eq!(format!("{}.md", doc.topic()), *name);
        }
    }
}
