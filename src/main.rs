use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};

use conllu_tools::slicer::{split_conllu, Chunk, DEFAULT_TARGET_TOKENS};
use conllu_tools::{join_texts, source, SliceArchiveWriter};

/// Join and slice CoNLL-U treebank files at sentence boundaries
#[derive(Parser)]
#[command(name = "conllu-tools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one CoNLL-U file into bounded chunks, cutting only between sentences
    Slice {
        /// CoNLL-U file to slice
        input: PathBuf,

        /// Token count at which a chunk closes (0 = never split)
        #[arg(short, long, default_value_t = DEFAULT_TARGET_TOKENS)]
        target_tokens: usize,

        /// Output ZIP path (default: `{base}.zip` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the chunk table without writing an archive
        #[arg(long)]
        preview: bool,
    },

    /// Concatenate CoNLL-U files into a single file
    Join {
        /// Files to join, in order
        inputs: Vec<PathBuf>,

        /// Recursively collect `.conllu` files from this directory instead
        #[arg(short, long, conflicts_with = "inputs")]
        dir: Option<PathBuf>,

        /// Sort the inputs alphabetically by filename before joining
        #[arg(short, long)]
        sort: bool,

        /// Output path
        #[arg(short, long, default_value = "joined.conllu")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slice {
            input,
            target_tokens,
            output,
            preview,
        } => slice(&input, target_tokens, output, preview),
        Commands::Join {
            inputs,
            dir,
            sort,
            output,
        } => join(inputs, dir, sort, &output),
    }
}

fn slice(input: &Path, target_tokens: usize, output: Option<PathBuf>, preview: bool) -> Result<()> {
    let text = source::read_text(input)?;
    let base = source::base_name(input);

    let chunks = split_conllu(&text, &base, target_tokens);
    if chunks.is_empty() {
        eprintln!("[slice] {} is empty, no chunks produced", input.display());
        return Ok(());
    }

    print_preview(&chunks);

    if preview {
        return Ok(());
    }

    let out_path = output.unwrap_or_else(|| input.with_file_name(format!("{}.zip", base)));
    let source_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string);

    let mut writer = SliceArchiveWriter::new(source_name, Some(source::hash_text(&text)));
    writer.write_to_file(&out_path, &chunks)?;

    Ok(())
}

fn join(inputs: Vec<PathBuf>, dir: Option<PathBuf>, sort: bool, output: &Path) -> Result<()> {
    let mut paths = match dir {
        Some(dir) => source::collect_conllu_files(&dir)?,
        None => inputs,
    };
    ensure!(!paths.is_empty(), "no input files to join");

    if sort {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    let mut texts = Vec::with_capacity(paths.len());
    for path in &paths {
        eprintln!("[join] Reading {}", path.display());
        texts.push(source::read_text(path)?);
    }

    let joined = join_texts(&texts);
    fs::write(output, &joined).context(format!("Failed to write {}", output.display()))?;

    eprintln!(
        "[join] ✓ Joined {} files into {}",
        paths.len(),
        output.display()
    );

    Ok(())
}

/// Print the per-chunk table shown before archiving
fn print_preview(chunks: &[Chunk]) {
    println!("=== Slice Preview ({} chunks) ===", chunks.len());
    println!(
        "{:<36} {:>10} {:>10} {:>12}",
        "Filename", "Tokens", "Sentences", "Size"
    );
    for chunk in chunks {
        println!(
            "{:<36} {:>10} {:>10} {:>12}",
            chunk.filename,
            chunk.metadata.token_count,
            chunk.metadata.sentence_count,
            format_bytes(chunk.metadata.byte_size)
        );
    }

    let total_tokens: usize = chunks.iter().map(|c| c.metadata.token_count).sum();
    let total_bytes: usize = chunks.iter().map(|c| c.metadata.byte_size).sum();
    println!(
        "{:<36} {:>10} {:>10} {:>12}",
        "Total",
        total_tokens,
        chunks
            .iter()
            .map(|c| c.metadata.sentence_count)
            .sum::<usize>(),
        format_bytes(total_bytes)
    );
}

/// Human-readable size with 1024-based units
fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

    if bytes < 1024 {
        return format!("{} Bytes", bytes);
    }

    let exp = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    format!("{:.2} {}", bytes as f64 / 1024_f64.powi(exp as i32), UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn test_format_bytes_picks_sensible_units() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }
}
