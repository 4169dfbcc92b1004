//! Shared fixtures for the integration tests
//!
//! Builds a throwaway SST test directory with a fake `sst` script that
//! copies canned statistics from `canned/<stem>/` into `results/`.

#![allow(dead_code)]

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const FAKE_SST: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
stem=$(basename "$1" .xml)
echo "SST simulation of $1 starting"
touch NULL trace_debug.out
if [ -f "canned/$stem/crash" ]; then
    echo "simulated crash" >&2
    exit 139
fi
if [ -f "canned/$stem/hang" ]; then
    exec sleep 30
fi
mkdir -p results
cp canned/$stem/*.stat.out results/ 2>/dev/null
exit 0
"#;

/// A test directory plus a separate directory holding the fake simulator
pub struct Workspace {
    pub root: TempDir,
    pub bin: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let ws = Self {
            root: tempfile::tempdir().expect("Failed to create test dir"),
            bin: tempfile::tempdir().expect("Failed to create bin dir"),
        };
        ws.install_simulator();
        ws
    }

    /// A workspace whose search path has no simulator
    pub fn without_simulator() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create test dir"),
            bin: tempfile::tempdir().expect("Failed to create bin dir"),
        }
    }

    /// A workspace whose `sst` exists but lacks execute permission
    pub fn with_non_executable_simulator() -> Self {
        let ws = Self::without_simulator();
        let path = ws.bin.path().join("sst");
        fs::write(&path, FAKE_SST).expect("Failed to write fake sst");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
            .expect("Failed to chmod fake sst");
        ws
    }

    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    pub fn search_path(&self) -> OsString {
        std::env::join_paths([self.bin.path()]).expect("Invalid search path")
    }

    fn install_simulator(&self) {
        let path = self.bin.path().join("sst");
        fs::write(&path, FAKE_SST).expect("Failed to write fake sst");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake sst");
    }

    /// Add an input `sdl<name>.xml`
    pub fn input(&self, stem: &str) -> &Self {
        fs::write(self.dir().join(format!("{stem}.xml")), "<sdl version=\"2.0\"/>\n")
            .expect("Failed to write input");
        self
    }

    /// Add a golden statistics file for `stem`
    pub fn golden(&self, stem: &str, file: &str, content: &str) -> &Self {
        let dir = self.dir().join("references").join("hotspot").join(stem);
        fs::create_dir_all(&dir).expect("Failed to create golden dir");
        fs::write(dir.join(file), content).expect("Failed to write golden file");
        self
    }

    /// Statistics the fake simulator will produce for `stem`
    pub fn produces(&self, stem: &str, file: &str, content: &str) -> &Self {
        let dir = self.canned_dir(stem);
        fs::write(dir.join(file), content).expect("Failed to write canned output");
        self
    }

    /// Make the fake simulator crash on `stem`
    pub fn crashes(&self, stem: &str) -> &Self {
        fs::write(self.canned_dir(stem).join("crash"), "").expect("Failed to write marker");
        self
    }

    /// Make the fake simulator hang on `stem`
    pub fn hangs(&self, stem: &str) -> &Self {
        fs::write(self.canned_dir(stem).join("hang"), "").expect("Failed to write marker");
        self
    }

    fn canned_dir(&self, stem: &str) -> PathBuf {
        let dir = self.dir().join("canned").join(stem);
        fs::create_dir_all(&dir).expect("Failed to create canned dir");
        dir
    }
}
