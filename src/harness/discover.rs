//! Test case enumeration
//!
//! A test case is any entry of the base directory whose name matches the
//! input pattern (`sdl*.xml` by default).

use std::path::{Path, PathBuf};

use crate::common::{Error, HarnessConfig, Result};

/// One input file and the paths derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Input file name as matched; also the report key and simulator argument
    pub file_name: String,
    /// File name without its final extension
    pub stem: String,
    /// Directory holding the golden statistics for this case
    pub golden_dir: PathBuf,
}

impl TestCase {
    /// Build a test case for `file_name` under `config`
    pub fn new(file_name: &str, config: &HarnessConfig) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let golden_dir = config.golden_dir(&stem);
        Self {
            file_name: file_name.to_string(),
            stem,
            golden_dir,
        }
    }
}

/// List the test cases in `config.base_dir`, sorted by file name
pub fn discover_tests(config: &HarnessConfig) -> Result<Vec<TestCase>> {
    let dir = &config.base_dir;
    let entries = std::fs::read_dir(dir).map_err(|e| Error::Discovery {
        path: dir.display().to_string(),
        error: e.to_string(),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        // Skip entries that can't be read
        let Ok(entry) = entry else { continue };
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(entry = ?entry.file_name(), "Skipping non UTF-8 file name");
            continue;
        };
        if glob_match(&config.input_pattern, &name) {
            names.push(name);
        }
    }
    names.sort();

    Ok(names.iter().map(|n| TestCase::new(n, config)).collect())
}

/// Shell-style match of a single file name against `pattern`
///
/// Supports `*` (any run of characters) and `?` (exactly one character).
/// Like shell globbing, names starting with `.` only match patterns that
/// also start with `.`.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    if name.starts_with('.') && !pattern.starts_with('.') {
        return false;
    }

    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    let (mut pi, mut ni) = (0, 0);
    // Position of the last `*` and the name index it is currently absorbing up to
    let mut backtrack: Option<(usize, usize)> = None;

    while ni < n.len() {
        match p.get(pi) {
            Some('*') => {
                backtrack = Some((pi, ni));
                pi += 1;
            }
            Some('?') => {
                pi += 1;
                ni += 1;
            }
            Some(&c) if c == n[ni] => {
                pi += 1;
                ni += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    pi = star + 1;
                    ni = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}
