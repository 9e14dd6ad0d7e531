use serde::{Deserialize, Serialize};

use crate::index::{DocId, InvertedIndex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}

/// Smoothed inverse document frequency, `ln((N + 1) / (df + 1))`.
///
/// Zero when the term is in every document; negative if `df > N`.
pub fn idf(num_docs: usize, df: usize) -> f64 {
    ((num_docs as f64 + 1.0) / (df as f64 + 1.0)).ln()
}

/// Rank the documents containing `term` by `tf * idf`, highest first.
///
/// Equal scores keep posting order (the order documents were added).
pub fn search_with_score(index: &InvertedIndex, term: &str) -> Vec<SearchResult> {
    let Some(plist) = index.posting_list(term) else {
        return Vec::new();
    };

    let idf = idf(index.document_count(), plist.document_frequency());
    let mut results: Vec<SearchResult> = plist
        .iter()
        .map(|p| SearchResult {
            doc_id: p.doc_id.clone(),
            score: p.term_frequency as f64 * idf,
        })
        .collect();
    // stable: ties stay in insertion order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::trace!(term, idf, hits = results.len(), "scored term");
    results
}
