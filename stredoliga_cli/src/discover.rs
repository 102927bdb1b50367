//! Input discovery: per-event XML documents in the configured directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Find all `*.xml` result documents under `dir`, sorted by path.
///
/// Discovery order does not affect the report (events are re-sorted by
/// date), but a sorted listing keeps logs and error messages
/// deterministic. An empty listing aborts the run before any parsing,
/// so no output file is ever produced.
pub fn discover_result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.xml", dir.display());
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern {pattern}"))?
        .filter_map(std::result::Result::ok)
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("no *.xml result files found in {}", dir.display());
    }
    Ok(files)
}
