use anyhow::{ensure, Context, Result};
use chrono::{Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::slicer::Chunk;

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub source_file: Option<String>,
    pub source_sha256: Option<String>,
    pub stats: ManifestStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestStats {
    pub chunk_count: u32,
    pub token_count: u64,
    pub sentence_count: u64,
    pub total_size_bytes: u64,
}

/// Packages a chunk sequence into a ZIP archive, one entry per chunk plus a
/// `manifest.json` describing the slice run
pub struct SliceArchiveWriter {
    manifest: Manifest,
}

impl SliceArchiveWriter {
    /// Create a writer for chunks sliced from the named source file
    pub fn new(source_file: Option<String>, source_sha256: Option<String>) -> Self {
        let manifest = Manifest {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("conllu-tools v{}", env!("CARGO_PKG_VERSION")),
            source_file,
            source_sha256,
            stats: ManifestStats {
                chunk_count: 0,
                token_count: 0,
                sentence_count: 0,
                total_size_bytes: 0,
            },
        };

        Self { manifest }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Fill manifest stats from the chunk sequence
    fn update_stats(&mut self, chunks: &[Chunk]) {
        self.manifest.stats.chunk_count = chunks.len() as u32;
        self.manifest.stats.token_count = chunks
            .iter()
            .map(|c| c.metadata.token_count as u64)
            .sum();
        self.manifest.stats.sentence_count = chunks
            .iter()
            .map(|c| c.metadata.sentence_count as u64)
            .sum();
        self.manifest.stats.total_size_bytes = chunks
            .iter()
            .map(|c| c.metadata.byte_size as u64)
            .sum();
    }

    /// Write the archive to `output_path`.
    ///
    /// An empty chunk sequence is rejected before any file is created, so a
    /// "no chunks" condition never leaves a half-written archive behind.
    pub fn write_to_file(&mut self, output_path: &Path, chunks: &[Chunk]) -> Result<()> {
        ensure!(!chunks.is_empty(), "no chunks to archive");

        self.update_stats(chunks);

        eprintln!(
            "[archive] Writing slice archive to: {}",
            output_path.display()
        );

        let file = File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        let mut zip = ZipWriter::new(file);
        let now = chrono::Local::now();
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644)
            .last_modified_time(
                zip::DateTime::from_date_and_time(
                    now.year() as u16,
                    now.month() as u8,
                    now.day() as u8,
                    now.hour() as u8,
                    now.minute() as u8,
                    now.second() as u8,
                )
                .unwrap_or_default(),
            );

        for chunk in chunks {
            zip.start_file(chunk.filename.as_str(), options)
                .context(format!("Failed to start {} in ZIP", chunk.filename))?;
            zip.write_all(chunk.content.as_bytes())
                .context(format!("Failed to write {} to ZIP", chunk.filename))?;
        }

        zip.start_file("manifest.json", options)
            .context("Failed to start manifest file in ZIP")?;
        let manifest_json = serde_json::to_string_pretty(&self.manifest)
            .context("Failed to serialize manifest")?;
        zip.write_all(manifest_json.as_bytes())
            .context("Failed to write manifest to ZIP")?;

        zip.finish().context("Failed to finalize ZIP file")?;

        eprintln!(
            "[archive] ✓ Wrote {} chunks ({} tokens, {} sentences)",
            self.manifest.stats.chunk_count,
            self.manifest.stats.token_count,
            self.manifest.stats.sentence_count
        );

        Ok(())
    }
}
