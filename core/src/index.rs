use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::parser::TokenEntry;

pub type DocId = String;

/// One document's occurrences of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_frequency: usize, // always positions.len()
    pub positions: Vec<usize>, // source order, not sorted
}

/// All postings for one term, in the order their documents were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    /// Number of documents containing the term. A document contributes at
    /// most one posting per term, so this is the posting count.
    pub fn document_frequency(&self) -> usize {
        self.postings.len()
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Append-only, in-memory term → posting list map.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingList>,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one parsed document. Entries are grouped by term; each group's
    /// positions keep their relative order. Always counts as one document,
    /// even when `entries` is empty.
    ///
    /// Callers must not reuse a `doc_id`.
    pub fn add_document(&mut self, doc_id: &str, entries: &[TokenEntry]) {
        // term -> slot in `groups`, so terms are appended in first-seen order
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for entry in entries {
            let slot = *slots.entry(entry.text.as_str()).or_insert_with(|| {
                groups.push((entry.text.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(entry.position);
        }

        for (term, positions) in groups {
            let plist = self.terms.entry(term.to_string()).or_default();
            plist.postings.push(Posting {
                doc_id: doc_id.to_string(),
                term_frequency: positions.len(),
                positions,
            });
        }
        self.num_docs += 1;

        tracing::debug!(
            doc_id,
            tokens = entries.len(),
            distinct_terms = slots.len(),
            num_terms = self.terms.len(),
            "indexed document"
        );
    }

    /// Document ids containing `term`, in insertion order. Empty when the
    /// term was never indexed.
    pub fn search(&self, term: &str) -> Vec<DocId> {
        self.terms
            .get(term)
            .map(|plist| plist.iter().map(|p| p.doc_id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    pub fn document_count(&self) -> usize {
        self.num_docs
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_docs == 0
    }
}
