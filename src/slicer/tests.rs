use super::*;

/// Build a CoNLL-U text with one sentence block per entry in `token_counts`:
/// two comment lines, that many token lines, and a terminating blank line.
fn treebank(token_counts: &[usize]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (id, &tokens) in token_counts.iter().enumerate() {
        lines.push(format!("# sent_id = s{}", id + 1));
        lines.push(format!("# text = sentence {}", id + 1));
        for i in 1..=tokens {
            lines.push(format!("{}\tw{}\tw{}\tNOUN\t_\t_\t0\troot\t_\t_", i, i, i));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Count token and blank lines directly, independent of the splitter
fn count_lines(text: &str) -> (usize, usize) {
    let mut tokens = 0;
    let mut blanks = 0;
    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blanks += 1;
        } else if !trimmed.starts_with('#') {
            tokens += 1;
        }
    }
    (tokens, blanks)
}

#[test]
fn test_below_target_sentences_share_one_chunk() {
    // 3 tokens is below the target of 4, so the first boundary does not
    // close; the second sentence pushes the count to 5 and closes there
    let text = treebank(&[3, 2]);
    let chunks = split_conllu(&text, "input", 4);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].filename, "input.001.conllu");
    assert_eq!(chunks[0].metadata.token_count, 5);
    assert_eq!(chunks[0].metadata.sentence_count, 2);
    assert_eq!(chunks[0].content, text);
}

#[test]
fn test_one_sentence_per_chunk_at_exact_target() {
    let text = treebank(&[5, 5, 5]);
    let chunks = split_conllu(&text, "input", 5);

    assert_eq!(chunks.len(), 3);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.filename, format!("input.{:03}.conllu", i + 1));
        assert_eq!(chunk.metadata.token_count, 5);
        assert_eq!(chunk.metadata.sentence_count, 1);
    }
}

#[test]
fn test_empty_input_yields_no_chunks() {
    let chunks = split_conllu("", "input", 10);
    assert!(chunks.is_empty());
}

#[test]
fn test_missing_trailing_blank_line_still_emits_final_chunk() {
    // Strip the blank line after the last sentence (malformed but common)
    let text = treebank(&[2, 2]);
    let text = text.trim_end_matches('\n');
    let chunks = split_conllu(text, "input", 2);

    assert_eq!(chunks.len(), 2);
    // The final chunk never saw a boundary, so it carries no sentence count
    assert_eq!(chunks[1].metadata.token_count, 2);
    assert_eq!(chunks[1].metadata.sentence_count, 0);
    assert!(!chunks[1].content.ends_with('\n'));

    let rejoined: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(rejoined.join("\n"), text);
}

#[test]
fn test_round_trip_reconstructs_input() {
    let text = treebank(&[2, 7, 1, 3, 4]);
    let chunks = split_conllu(&text, "input", 3);
    assert!(chunks.len() > 1);

    let rejoined: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(rejoined.join("\n"), text);
}

#[test]
fn test_token_and_sentence_conservation() {
    let text = treebank(&[2, 3, 1, 4]);
    let (total_tokens, total_blanks) = count_lines(&text);
    let chunks = split_conllu(&text, "input", 3);

    let token_sum: usize = chunks.iter().map(|c| c.metadata.token_count).sum();
    let sentence_sum: usize = chunks.iter().map(|c| c.metadata.sentence_count).sum();
    assert_eq!(token_sum, total_tokens);
    assert_eq!(sentence_sum, total_blanks);
}

#[test]
fn test_chunks_close_only_at_sentence_boundaries() {
    let text = treebank(&[1, 1, 1, 1, 1, 5, 1]);
    let chunks = split_conllu(&text, "input", 4);

    // Every chunk except the last ends on a blank line
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.content.split('\n').next_back(), Some(""));
    }
    // Every non-final chunk reached the target before closing
    for chunk in &chunks[..chunks.len() - 1] {
        assert!(chunk.metadata.token_count >= 4);
    }
}

#[test]
fn test_oversized_sentence_is_never_cut() {
    // A single 9-token sentence with a target of 2 must stay whole
    let text = treebank(&[9]);
    let chunks = split_conllu(&text, "input", 2);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.token_count, 9);
}

#[test]
fn test_zero_target_disables_splitting() {
    let text = treebank(&[5, 5, 5]);
    let chunks = split_conllu(&text, "input", 0);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].filename, "input.001.conllu");
    assert_eq!(chunks[0].metadata.token_count, 15);
    assert_eq!(chunks[0].metadata.sentence_count, 3);
    assert_eq!(chunks[0].content, text);
}

#[test]
fn test_crlf_blank_lines_terminate_sentences() {
    // CRLF input: the \r stays in the content, but a \r-only line still
    // counts as a sentence boundary
    let text = "1\tdog\tdog\tNOUN\t_\t_\t0\troot\t_\t_\r\n\r\n1\tcat\tcat\tNOUN\t_\t_\t0\troot\t_\t_\r\n\r";
    let chunks = split_conllu(text, "input", 1);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].metadata.token_count, 1);
    assert_eq!(chunks[0].metadata.sentence_count, 1);
    assert!(chunks[0].content.ends_with('\r'));

    let rejoined: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(rejoined.join("\n"), text);
}

#[test]
fn test_consecutive_blank_lines_each_count() {
    let text = "1\tdog\tdog\tNOUN\t_\t_\t0\troot\t_\t_\n\n\n";
    let chunks = split_conllu(text, "input", 100);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.sentence_count, 3);
}

#[test]
fn test_chunk_numbering_is_contiguous_and_padded() {
    let text = treebank(&[1; 12]);
    let chunks = split_conllu(&text, "corpus", 1);

    assert_eq!(chunks.len(), 12);
    assert_eq!(chunks[0].filename, "corpus.001.conllu");
    assert_eq!(chunks[9].filename, "corpus.010.conllu");
    assert_eq!(chunks[11].filename, "corpus.012.conllu");
}

#[test]
fn test_byte_size_matches_content() {
    let text = treebank(&[4, 4]);
    let chunks = split_conllu(&text, "input", 4);

    for chunk in &chunks {
        assert_eq!(chunk.metadata.byte_size, chunk.content.len());
    }
}
