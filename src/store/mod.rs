//! Document store
//!
//! Holds the guidance documents keyed by topic. The store is built once and
//! never mutated afterwards, so a shared reference can be handed to any
//! number of readers.

pub mod builtin;
pub mod document;
pub mod loader;

pub use document::{DocumentSource, GuidanceDocument};

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::errors::LoadError;

/// Read-only collection of guidance documents, iterated in topic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    documents: BTreeMap<String, GuidanceDocument>,
}

impl DocumentStore {
    /// Build a store from parsed documents, rejecting duplicate topics
    pub fn from_documents<I>(documents: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = GuidanceDocument>,
    {
        let mut map = BTreeMap::new();
        for document in documents {
            match map.entry(document.topic().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(document);
                }
                Entry::Occupied(existing) => {
                    return Err(LoadError::DuplicateTopic {
                        topic: existing.key().clone(),
                        first: existing.get().source().to_string(),
                        second: document.source().to_string(),
                    });
                }
            }
        }
        Ok(Self { documents: map })
    }

    /// Load the documents bundled into the binary
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_documents(builtin::documents()?)
    }

    /// Load every document in a directory
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        Self::from_documents(loader::load_dir(dir)?)
    }

    /// Load bundled documents and the configured documents directory.
    ///
    /// A directory document replaces a bundled document with the same topic.
    pub fn load(config: &StoreConfig) -> Result<Self, LoadError> {
        let mut store = if config.include_builtin {
            Self::builtin()?
        } else {
            Self::default()
        };

        if let Some(dir) = config.docs_path() {
            let user = Self::load_dir(&dir)?;
            for (topic, document) in user.documents {
                if let Some(replaced) = store.documents.insert(topic, document) {
                    debug!(topic = replaced.topic(), "Bundled document replaced by directory document");
                }
            }
        }

        info!(count = store.len(), "Loaded guidance documents");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by topic, falling back to the lower-cased topic
    pub fn get(&self, topic: &str) -> Option<&GuidanceDocument> {
        self.documents
            .get(topic)
            .or_else(|| self.documents.get(&topic.trim().to_lowercase()))
    }

    /// Documents in topic order
    pub fn iter(&self) -> impl Iterator<Item = &GuidanceDocument> {
        self.documents.values()
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Union of all document tags, sorted
    pub fn tags(&self) -> BTreeSet<&str> {
        self.iter()
            .flat_map(|doc| doc.tags().iter().map(String::as_str))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DocumentStore {
    type Item = &'a GuidanceDocument;
    type IntoIter = std::collections::btree_map::Values<'a, String, GuidanceDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn doc(topic: &str, tags: &[&str]) -> GuidanceDocument {
        GuidanceDocument::new(topic, tags.iter().copied(), format!("{} body", topic))
    }

    #[test]
    fn test_store_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentStore>();
    }

    #[test]
    fn test_iteration_in_topic_order() {
        let store = DocumentStore::from_documents(vec![doc("b", &[]), doc("a", &[]), doc("c", &[])])
            .unwrap();
        let topics: Vec<&str> = store.topics().collect();
        assert_eq!(topics, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let first = doc("naming", &[]).with_source(DocumentSource::File(PathBuf::from("a.md")));
        let second = doc("naming", &[]).with_source(DocumentSource::File(PathBuf::from("b.md")));
        let err = DocumentStore::from_documents(vec![first, second]).unwrap_err();
        match err {
            LoadError::DuplicateTopic { topic, first, second } => {
                assert_eq!(topic, "naming");
                assert_eq!(first, "a.md");
                assert_eq!(second, "b.md");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let store = DocumentStore::from_documents(vec![doc("naming", &["style"])]).unwrap();
        assert!(store.get("Naming").is_some());
        assert!(store.get("testing").is_none());
    }

    #[test]
    fn test_tags_union() {
        let store = DocumentStore::from_documents(vec![
            doc("a", &["swift", "style"]),
            doc("b", &["swiftui", "style"]),
        ])
        .unwrap();
        let tags: Vec<&str> = store.tags().into_iter().collect();
        assert_eq!(tags, vec!["style", "swift", "swiftui"]);
    }

    #[test]
    fn test_builtin_load_is_idempotent() {
        let first = DocumentStore::builtin().unwrap();
        let second = DocumentStore::builtin().unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_directory_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("naming.md"),
            "+++\ntags = [\"house\"]\n+++\nHouse naming rules.",
        )
        .unwrap();

        let config = StoreConfig {
            docs_dir: Some(temp.path().to_string_lossy().to_string()),
            include_builtin: true,
        };
        let store = DocumentStore::load(&config).unwrap();
        let builtin = DocumentStore::builtin().unwrap();

        assert_eq!(store.len(), builtin.len());
        let naming = store.get("naming").unwrap();
        assert_eq!(naming.body(), "House naming rules.");
        assert!(naming.has_tag("house"));
    }

    #[test]
    fn test_load_without_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("only.md"), "Only document.").unwrap();

        let config = StoreConfig {
            docs_dir: Some(temp.path().to_string_lossy().to_string()),
            include_builtin: false,
        };
        let store = DocumentStore::load(&config).unwrap();
        assert_eq!(store.topics().collect::<Vec<_>>(), vec!["only"]);
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig {
            docs_dir: Some(temp.path().join("missing").to_string_lossy().to_string()),
            include_builtin: true,
        };
        let err = DocumentStore::load(&config).unwrap_err();
        assert!(matches!(err, LoadError::MissingSource { .. }));
    }

    #[test]
    fn test_empty_config_yields_empty_store() {
        let config = StoreConfig {
            docs_dir: None,
            include_builtin: false,
        };
        assert!(DocumentStore::load(&config).unwrap().is_empty());
    }
}
