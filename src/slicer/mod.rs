mod splitter;

#[cfg(test)]
mod tests;

pub use splitter::{split_conllu, Chunk, ChunkMetadata};

/// Default token target per chunk (matches the interactive tool default)
pub const DEFAULT_TARGET_TOKENS: usize = 10_000;
