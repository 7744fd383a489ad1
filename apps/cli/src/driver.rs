//! Batch conversion of a directory of dictionary pages.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use dictcard_core::{format_row, DictError, Extractor};
use scraper::Html;
use tracing::{debug, error, info, warn};

use crate::config::Config;

/// Outcome counts of one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// List the files in `dir` with the given extension, sorted by path.
pub fn collect_inputs(dir: &Path, extension: &str) -> dictcard_core::Result<Vec<PathBuf>> {
    let io_error = |source: std::io::Error| DictError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// The word a page describes: its file name without the last extension.
pub fn word_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
}

/// Convert one page into an import row.
///
/// Returns `None` when the page holds no dictionary entry at all.
pub fn convert_file(extractor: &Extractor, path: &Path) -> dictcard_core::Result<Option<String>> {
    let Some(word) = word_from_path(path) else {
        warn!(path = %path.display(), "no word in file name, skipping");
        return Ok(None);
    };

    let content = fs::read_to_string(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Html::parse_document(&content);

    if !extractor.has_entries(&document) {
        debug!(path = %path.display(), "no entries, skipping");
        return Ok(None);
    }

    let record = extractor.extract(&word, &document);
    debug!(
        word = %record.word,
        record = %serde_json::to_string(&record).unwrap_or_default(),
        "extracted"
    );

    Ok(Some(format_row(&record)))
}

/// Convert every page under the configured directory, writing one row per
/// word to `out`.
///
/// A page that cannot be read is logged and counted; the batch carries on.
pub fn convert_directory<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<BatchSummary> {
    let extractor = Extractor::with_prefixes(config.prefixes())?;
    let inputs = collect_inputs(&config.input_dir, &config.extension)
        .with_context(|| format!("failed to list {}", config.input_dir.display()))?;

    info!(
        dir = %config.input_dir.display(),
        files = inputs.len(),
        "converting pages"
    );

    let mut summary = BatchSummary::default();
    for path in &inputs {
        match convert_file(&extractor, path) {
            Ok(Some(row)) => {
                writeln!(out, "{row}").context("failed to write output row")?;
                summary.converted += 1;
            }
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                error!(path = %path.display(), "{e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
