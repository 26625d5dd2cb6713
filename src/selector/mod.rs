//! Selector: ranks guidance documents against a free-text query
//!
//! Scoring is plain keyword overlap. A document scores one point for every
//! distinct query term found among its keywords (topic, tags, the terms
//! they split into, and their `-`/`_` parts). Results are ordered by score,
//! then by topic.

pub mod query;

pub use query::Query;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{DocumentStore, GuidanceDocument};

/// Selection options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOptions {
    /// Maximum number of documents to return (None = unlimited)
    pub limit: Option<usize>,
}

impl SelectOptions {
    /// Options from a configured limit where 0 means unlimited
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
        }
    }
}

/// A selected document with its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub document: &'a GuidanceDocument,
    pub score: usize,
    pub matched_terms: Vec<String>,
}

/// Query-to-document ranking over a borrowed store
pub struct Selector<'a> {
    store: &'a DocumentStore,
    options: SelectOptions,
}

impl<'a> Selector<'a> {
    /// Create a selector with default (unlimited) options
    pub fn new(store: &'a DocumentStore) -> Self {
        Self {
            store,
            options: SelectOptions::default(),
        }
    }

    /// Create with custom options
    pub fn with_options(store: &'a DocumentStore, options: SelectOptions) -> Self {
        Self { store, options }
    }

    /// Matching documents, best first
    pub fn select(&self, query: &str) -> Vec<&'a GuidanceDocument> {
        self.select_ranked(query)
            .into_iter()
            .map(|m| m.document)
            .collect()
    }

    /// Matching documents with scores, best first
    pub fn select_ranked(&self, query: &str) -> Vec<Match<'a>> {
        let query = Query::parse(query);

        let mut matches: Vec<Match<'a>> = if query.is_empty() {
            self.store
                .iter()
                .map(|document| Match {
                    document,
                    score: 0,
                    matched_terms: Vec::new(),
                })
                .collect()
        } else {
            self.store
                .iter()
                .filter_map(|document| Self::score(document, &query))
                .collect()
        };

        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.document.topic().cmp(b.document.topic()))
        });

        if let Some(limit) = self.options.limit {
            matches.truncate(limit);
        }

        debug!(terms = query.len(), results = matches.len(), "Selected documents");
        matches
    }

    fn score(document: &'a GuidanceDocument, query: &Query) -> Option<Match<'a>> {
        let keywords = document.keywords();
        let matched_terms: Vec<String> = query
            .terms()
            .filter(|term| keywords.contains(*term))
            .map(str::to_string)
            .collect();

        if matched_terms.is_empty() {
            return None;
        }

        Some(Match {
            document,
            score: matched_terms.len(),
            matched_terms,
        })
    }
}
