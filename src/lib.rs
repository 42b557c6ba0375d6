// Public API exports
pub mod archive;
pub mod joiner;
pub mod slicer;
pub mod source;

// Re-export main types for convenience
pub use archive::{Manifest, ManifestStats, SliceArchiveWriter};
pub use joiner::join_texts;
pub use slicer::{split_conllu, Chunk, ChunkMetadata, DEFAULT_TARGET_TOKENS};
pub use source::{base_name, collect_conllu_files, hash_text, read_text, SourceError};
