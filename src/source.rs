use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use walkdir::WalkDir;

/// Fallback stem when no usable filename is available
const DEFAULT_BASE_NAME: &str = "sliced";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: String },

    #[error("Failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Read a file and decode it as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        path: path.display().to_string(),
    })
}

/// Derive the output stem from a source filename by stripping its last
/// extension, e.g. `corpus/train.conllu` -> `train`
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

/// Recursively collect `.conllu` files under a directory, sorted by path
pub fn collect_conllu_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_conllu = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("conllu"))
            .unwrap_or(false);
        if is_conllu {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Hex-encoded SHA-256 of the input text, recorded in the slice manifest
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
