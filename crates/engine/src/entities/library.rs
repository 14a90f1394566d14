//! Historical document library and keyword retrieval.
//!
//! Retrieval is a linear substring-overlap scorer, not a vector search. For
//! every lower-cased whitespace keyword of the query a document earns:
//!
//! | match                     | weight |
//! |---------------------------|--------|
//! | keyword inside the title  | 2.0    |
//! | keyword inside the text   | 1.0    |
//! | keyword inside any tag    | 1.5    |
//!
//! Documents scoring zero are dropped. The rest are ordered by descending
//! score, ties keeping library order.

use rpgmaestro_domain::{Document, DocumentField};

const TITLE_WEIGHT: f64 = 2.0;
const TEXT_WEIGHT: f64 = 1.0;
const TAG_WEIGHT: f64 = 1.5;

/// Number of documents returned when the caller does not ask for more.
pub const DEFAULT_RETRIEVAL_LIMIT: usize = 2;

/// Exact-match field filters applied before scoring.
///
/// A `tags` filter admits documents carrying that exact tag. Keys that are
/// not document fields and filters without a value are ignored.
#[derive(Debug, Clone, Default)]
pub struct RetrievalFilters {
    filters: Vec<(String, Option<String>)>,
}

impl RetrievalFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filters.push((key.into(), value.map(Into::into)));
        self
    }

    fn admits(&self, document: &Document) -> bool {
        self.filters.iter().all(|(key, value)| {
            match (DocumentField::from_key(key), value.as_deref()) {
                (Some(field), Some(expected)) => document.matches(field, expected),
                _ => true,
            }
        })
    }
}

/// Immutable in-memory document set.
#[derive(Debug, Clone)]
pub struct DocumentLibrary {
    documents: Vec<Document>,
}

impl DocumentLibrary {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Up to `k` documents relevant to `query`, best first.
    ///
    /// An empty result is a normal outcome, not an error.
    pub fn retrieve(&self, query: &str, k: usize, filters: &RetrievalFilters) -> Vec<Document> {
        let query = query.to_lowercase();
        let keywords: Vec<&str> = query.split_whitespace().collect();

        let mut scored: Vec<(f64, &Document)> = self
            .documents
            .iter()
            .filter(|doc| filters.admits(doc))
            .map(|doc| (score(doc, &keywords), doc))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // sort_by is stable, so equal scores keep library order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(k)
            .map(|(_, doc)| doc.clone())
            .collect()
    }
}

fn score(document: &Document, keywords: &[&str]) -> f64 {
    let title = document.title().to_lowercase();
    let text = document.text().to_lowercase();
    let tags: Vec<String> = document.tags().iter().map(|t| t.to_lowercase()).collect();

    keywords
        .iter()
        .map(|keyword| {
            let mut points = 0.0;
            if title.contains(keyword) {
                points += TITLE_WEIGHT;
            }
            if text.contains(keyword) {
                points += TEXT_WEIGHT;
            }
            if tags.iter().any(|tag| tag.contains(keyword)) {
                points += TAG_WEIGHT;
            }
            points
        })
        .sum()
}
