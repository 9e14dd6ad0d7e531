use anyhow::Result;
use postings_core::{parse_line, search_with_score, DocId, InvertedIndex, ParseError, SearchResult};
use serde::Serialize;
use std::io::BufRead;

/// A line that failed to parse and was skipped.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based physical line number.
    pub line_number: usize,
    pub error: ParseError,
}

#[derive(Debug, Default)]
pub struct IngestReport {
    pub documents: usize,
    pub blank_lines: usize,
    pub failures: Vec<LineFailure>,
}

/// Id of the `n`th successfully parsed document. Rejected and blank lines do
/// not consume a number.
pub fn document_id(n: usize) -> DocId {
    format!("doc_{n}")
}

/// Read tokenizer output line by line into `index`. Lines that fail to parse
/// are recorded and skipped; only read errors abort. Bytes that are not valid
/// UTF-8 become U+FFFD.
pub fn ingest<R: BufRead>(reader: R, index: &mut InvertedIndex) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    for (i, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        // Invalid UTF-8 is replaced rather than rejected; only the affected
        // string values change.
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = i + 1, "line is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        if line.trim().is_empty() {
            report.blank_lines += 1;
            continue;
        }
        match parse_line(&line) {
            Ok(entries) => {
                index.add_document(&document_id(report.documents), &entries);
                report.documents += 1;
            }
            Err(error) => {
                tracing::warn!(line = i + 1, %error, "skipping unparseable line");
                report.failures.push(LineFailure { line_number: i + 1, error });
            }
        }
    }
    tracing::info!(
        documents = report.documents,
        skipped = report.failures.len(),
        num_terms = index.term_count(),
        "ingested documents"
    );
    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub scores: bool,
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub term: String,
    pub total_hits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_ids: Option<Vec<DocId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
}

pub fn run_query(index: &InvertedIndex, term: &str, opts: &QueryOptions) -> QueryResponse {
    if opts.scores {
        let mut results = search_with_score(index, term);
        let total_hits = results.len();
        if let Some(k) = opts.limit {
            results.truncate(k);
        }
        QueryResponse { term: term.to_string(), total_hits, doc_ids: None, results: Some(results) }
    } else {
        let mut doc_ids = index.search(term);
        let total_hits = doc_ids.len();
        if let Some(k) = opts.limit {
            doc_ids.truncate(k);
        }
        QueryResponse { term: term.to_string(), total_hits, doc_ids: Some(doc_ids), results: None }
    }
}

/// One output line for a query, e.g. `'cat': [doc_0 doc_1]`.
pub fn render(resp: &QueryResponse, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string(resp)?);
    }
    if resp.total_hits == 0 {
        return Ok(format!("'{}': no results", resp.term));
    }
    let items: Vec<String> = match (&resp.doc_ids, &resp.results) {
        (_, Some(results)) => results
            .iter()
            .map(|r| format!("{} ({:.4})", r.doc_id, r.score))
            .collect(),
        (Some(ids), None) => ids.clone(),
        (None, None) => Vec::new(),
    };
    Ok(format!("'{}': [{}]", resp.term, items.join(" ")))
}

pub fn stats_line(index: &InvertedIndex) -> String {
    format!(
        "Indexed {} documents, {} unique terms",
        index.document_count(),
        index.term_count()
    )
}
