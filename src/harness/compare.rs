//! Golden statistics comparison
//!
//! A case fails when a produced statistics file is missing or when a golden
//! line is missing from the produced output. Lines only the simulator
//! produced are not checked, and golden `EXE_TIME` lines may differ freely.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

use super::diff::removed_lines;

/// Outcome of comparing one case's statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every golden file was matched
    Pass,
    /// The produced counterpart of a golden file does not exist
    MissingOutput { file: String },
    /// A golden line is absent from the produced file
    Mismatch { file: String, line: String },
    /// A statistics file or directory could not be read
    Unreadable(String),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// File name suffix of statistics files
pub const STAT_SUFFIX: &str = ".stat.out";

/// Golden lines starting with this record wall-clock time and may differ
pub const IGNORED_PREFIX: &str = "EXE_TIME";

/// Compare every statistics file in `golden_dir` with its namesake in
/// `result_dir`, stopping at the first failure
pub fn compare_dirs(golden_dir: &Path, result_dir: &Path) -> Result<Verdict> {
    for golden in golden_files(golden_dir)? {
        let Some(name) = golden.file_name() else { continue };
        let produced = result_dir.join(name);
        let name = name.to_string_lossy().into_owned();

        if !produced.exists() {
            return Ok(Verdict::MissingOutput { file: name });
        }

        let golden_text = read_lossy(&golden)?;
        let produced_text = read_lossy(&produced)?;
        if let Some(line) = first_mismatch(&golden_text, &produced_text) {
            return Ok(Verdict::Mismatch { file: name, line });
        }
    }
    Ok(Verdict::Pass)
}

/// First golden line missing from `produced` that is not a timing line
pub fn first_mismatch(golden: &str, produced: &str) -> Option<String> {
    removed_lines(golden, produced)
        .find(|line| !line.content.starts_with(IGNORED_PREFIX))
        .map(|line| line.content)
}

/// Statistics files in `dir`, sorted; a missing directory has none
///
/// Hidden files are skipped, like `*.stat.out` in a shell.
fn golden_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "No golden directory");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::file_read(dir, e)),
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| !n.starts_with('.') && n.ends_with(STAT_SUFFIX))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
