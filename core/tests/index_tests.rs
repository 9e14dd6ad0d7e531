use postings_core::{parse_line, search_with_score, InvertedIndex, ParseError};

fn index_lines(lines: &[&str]) -> InvertedIndex {
    let mut idx = InvertedIndex::new();
    for (i, line) in lines.iter().enumerate() {
        let entries = parse_line(line).unwrap();
        idx.add_document(&format!("doc{i}"), &entries);
    }
    idx
}

#[test]
fn cat_and_dog() {
    let idx = index_lines(&[
        r#"[{"token":"cat","pos":0},{"token":"dog","pos":1}]"#,
        r#"[{"token":"cat","pos":0}]"#,
    ]);

    assert_eq!(idx.document_count(), 2);
    assert_eq!(idx.term_count(), 2);
    assert_eq!(idx.search("cat"), vec!["doc0", "doc1"]);
    assert_eq!(idx.search("dog"), vec!["doc0"]);
    assert!(idx.search("bird").is_empty());

    let dog = search_with_score(&idx, "dog");
    assert_eq!(dog.len(), 1);
    assert_eq!(dog[0].doc_id, "doc0");
    assert!((dog[0].score - (3.0f64 / 2.0).ln()).abs() < 1e-12);

    let cat = search_with_score(&idx, "cat");
    let ids: Vec<&str> = cat.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["doc0", "doc1"]);
    assert!(cat.iter().all(|r| r.score == 0.0));

    assert!(search_with_score(&idx, "bird").is_empty());
}

#[test]
fn repeated_term_is_one_posting() {
    let idx = index_lines(&[r#"[{"token":"a","pos":0},{"token":"b","pos":1},{"token":"a","pos":2}]"#]);
    assert_eq!(idx.search("a"), vec!["doc0"]);
    let posting = &idx.posting_list("a").unwrap().postings()[0];
    assert_eq!(posting.term_frequency, 2);
    assert_eq!(posting.positions, vec![0, 2]);
}

#[test]
fn rejected_line_leaves_index_untouched() {
    let mut idx = index_lines(&[r#"[{"token":"a","pos":0}]"#]);

    for bad in [r#"[{"token":"a"}]"#, r#"[{"token":"a","pos":0},]"#, "not json"] {
        match parse_line(bad) {
            Ok(entries) => idx.add_document("bad", &entries),
            Err(_) => continue,
        }
    }
    assert_eq!(idx.document_count(), 1);
    assert_eq!(idx.term_count(), 1);
    assert_eq!(idx.search("a"), vec!["doc0"]);
}

#[test]
fn parse_error_is_reported_as_value() {
    let err = parse_line(r#"[{"token":"a","pos":0} {"token":"b","pos":1}]"#).unwrap_err();
    assert_eq!(err, ParseError::ExpectedArrayEnd);
    assert_eq!(err.to_string(), "expected ']' at end");
}

#[test]
fn rare_terms_outrank_common_ones() {
    let idx = index_lines(&[
        r#"[{"token":"the","pos":0},{"token":"lynx","pos":1}]"#,
        r#"[{"token":"the","pos":0}]"#,
        r#"[{"token":"the","pos":0}]"#,
    ]);
    let lynx = search_with_score(&idx, "lynx")[0].score;
    let the = search_with_score(&idx, "the")[0].score;
    assert!(lynx > the);
    assert_eq!(the, 0.0);
}
