//! Guidance document type

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::selector::query::split_terms;

/// Where a document was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum DocumentSource {
    /// Compiled into the binary
    Builtin,
    /// Read from a file in the documents directory
    File(PathBuf),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Builtin => write!(f, "<builtin>"),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A unit of style-guide prose keyed by topic.
///
/// Immutable once built: fields are private and only exposed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceDocument {
    topic: String,
    tags: BTreeSet<String>,
    title: Option<String>,
    description: Option<String>,
    body: String,
    source: DocumentSource,
}

impl GuidanceDocument {
    /// Create a document. Tags are trimmed and lower-cased; empty tags are dropped.
    pub fn new<I, S>(topic: impl Into<String>, tags: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            topic: topic.into(),
            tags: normalize_tags(tags),
            title: None,
            description: None,
            body: body.into(),
            source: DocumentSource::Builtin,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source(mut self, source: DocumentSource) -> Self {
        self.source = source;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Check whether the document carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.trim().to_lowercase())
    }

    /// Keywords a query term can match: topic and tags whole, the terms they
    /// split into, and the `-`/`_` parts of those terms
    pub fn keywords(&self) -> BTreeSet<String> {
        let mut keywords = BTreeSet::new();
        let topic = self.topic.to_lowercase();
        for word in std::iter::once(topic.as_str()).chain(self.tags.iter().map(String::as_str)) {
            keywords.insert(word.to_string());
            for term in split_terms(word) {
                keywords.extend(
                    term.split(['-', '_'])
                        .filter(|part| !part.is_empty())
                        .map(str::to_string),
                );
                keywords.insert(term);
            }
        }
        keywords
    }
}

fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}
