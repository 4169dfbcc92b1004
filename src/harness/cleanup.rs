//! Per-case artifact removal
//!
//! Runs after every case whatever its outcome. Removal failures are logged
//! and otherwise ignored, like `rm -f` / `rm -rf`.

use std::io::ErrorKind;
use std::path::Path;

/// Files the simulator leaves in its working directory
pub const STRAY_FILES: [&str; 2] = ["NULL", "trace_debug.out"];

/// Remove the stray files from `base_dir` and the whole `result_dir`
pub fn clean_case_artifacts(base_dir: &Path, result_dir: &Path) {
    for name in STRAY_FILES {
        let path = base_dir.join(name);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Could not remove stray file");
            }
        }
    }

    if let Err(e) = std::fs::remove_dir_all(result_dir) {
        if e.kind() != ErrorKind::NotFound {
            tracing::debug!(path = %result_dir.display(), error = %e, "Could not remove result directory");
        }
    }
}
