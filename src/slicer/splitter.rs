use serde::Serialize;

/// One bounded slice of a CoNLL-U file, ready to be written out
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// The lines of this chunk, rejoined with line feeds, byte-for-byte verbatim
    pub content: String,
    /// Output filename, `{base}.{NNN}.conllu`
    pub filename: String,
    /// Counting metadata about the chunk
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChunkMetadata {
    /// Number of token lines (non-blank, non-comment)
    pub token_count: usize,
    /// Number of blank sentence-terminating lines
    pub sentence_count: usize,
    /// UTF-8 byte length of the content
    pub byte_size: usize,
}

/// Split a CoNLL-U file into chunks of at least `target_tokens` tokens,
/// cutting only at sentence boundaries:
/// - A line is a token line if it is non-blank after trimming and does not
///   start with `#`; a blank line is a sentence boundary.
/// - A chunk closes at the first sentence boundary where its token count has
///   reached the target, so a chunk may exceed the target but a sentence is
///   never cut mid-way.
/// - `target_tokens == 0` disables early closing and yields a single chunk
///   covering the whole input.
///
/// Lines are divided on `\n` only; a `\r` left behind by CRLF input stays in
/// the stored content, so concatenating all chunk contents with line feeds
/// reproduces the input exactly. Classification trims whitespace, so CRLF
/// blank lines still terminate sentences.
///
/// Empty input yields no chunks.
pub fn split_conllu(text: &str, base_name: &str, target_tokens: usize) -> Vec<Chunk> {
    if text.is_empty() {
        return vec![];
    }

    let mut chunks = Vec::new();
    let mut current_lines: Vec<&str> = Vec::new();
    let mut token_count = 0;
    let mut sentence_count = 0;
    let mut chunk_num = 1;

    for line in text.split('\n') {
        current_lines.push(line);

        let trimmed = line.trim();
        if trimmed.is_empty() {
            sentence_count += 1;

            // Closing is only considered at sentence boundaries
            if target_tokens > 0 && token_count >= target_tokens {
                chunks.push(build_chunk(
                    &current_lines,
                    base_name,
                    chunk_num,
                    token_count,
                    sentence_count,
                ));
                chunk_num += 1;
                token_count = 0;
                sentence_count = 0;
                current_lines.clear();
            }
        } else if !trimmed.starts_with('#') {
            token_count += 1;
        }
    }

    // Whatever is left either never reached the target or the input ended
    // without a trailing blank line; it still becomes the final chunk
    if !current_lines.is_empty() {
        chunks.push(build_chunk(
            &current_lines,
            base_name,
            chunk_num,
            token_count,
            sentence_count,
        ));
    }

    chunks
}

/// Assemble a chunk from accumulated lines
fn build_chunk(
    lines: &[&str],
    base_name: &str,
    chunk_num: u32,
    token_count: usize,
    sentence_count: usize,
) -> Chunk {
    let content = lines.join("\n");
    let byte_size = content.len();

    Chunk {
        filename: chunk_filename(base_name, chunk_num),
        metadata: ChunkMetadata {
            token_count,
            sentence_count,
            byte_size,
        },
        content,
    }
}

/// Filename for the `chunk_num`-th chunk: `{base}.{NNN}.conllu`
fn chunk_filename(base_name: &str, chunk_num: u32) -> String {
    format!("{}.{:03}.conllu", base_name, chunk_num)
}
