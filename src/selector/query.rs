//! Query tokenization

use std::collections::BTreeSet;

/// Lower-case `input`, then split on anything that is not alphanumeric, `-` or `_`.
///
/// Shared by queries and document keywords.
pub fn split_terms(input: &str) -> impl Iterator<Item = String> {
    let lowered = input.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .map(|term| term.trim_matches(|c| c == '-' || c == '_'))
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}

/// A parsed free-text query: distinct lower-cased terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn parse(input: &str) -> Self {
        Self {
            terms: split_terms(input).collect(),
        }
    }

    /// True when the query has no terms; an empty query matches every document
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
