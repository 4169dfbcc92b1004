//! Harness configuration
//!
//! Only the directory layout, the trace name, the input pattern and the
//! simulator timeout are configurable. Every value has a default matching the
//! stock SST unit-test layout, so an empty (or absent) configuration file
//! reproduces the classic harness.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::paths::config_path;
use super::{Error, Result};

/// Layout and policy for one harness run
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Directory holding the inputs; the simulator runs with this as its cwd
    #[serde(skip, default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Explicit search path for the simulator, `PATH` when unset
    #[serde(skip)]
    pub search_path: Option<OsString>,

    /// Trace name selecting the reference tree under `golden_root`
    #[serde(default = "default_trace")]
    pub trace: String,

    /// Shell glob selecting input files in `base_dir`
    #[serde(default = "default_input_pattern")]
    pub input_pattern: String,

    /// Root of the golden reference trees, relative to `base_dir`
    #[serde(default = "default_golden_root")]
    pub golden_root: PathBuf,

    /// Directory the simulator writes statistics to, relative to `base_dir`
    #[serde(default = "default_result_dir")]
    pub result_dir: PathBuf,

    /// Kill the simulator after this many seconds; wait forever when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            search_path: None,
            trace: default_trace(),
            input_pattern: default_input_pattern(),
            golden_root: default_golden_root(),
            result_dir: default_result_dir(),
            timeout_secs: None,
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_trace() -> String {
    "hotspot".to_string()
}
fn default_input_pattern() -> String {
    "sdl*.xml".to_string()
}
fn default_golden_root() -> PathBuf {
    PathBuf::from("references")
}
fn default_result_dir() -> PathBuf {
    PathBuf::from("results")
}

impl HarnessConfig {
    /// Load configuration
    ///
    /// Reads `explicit` when given (it must exist), otherwise the user config
    /// file if present, otherwise returns the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.trace.trim().is_empty() {
            return Err(Error::Config("trace must not be empty".to_string()));
        }
        if self.input_pattern.is_empty() {
            return Err(Error::Config("input_pattern must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Set the base directory
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Golden reference directory for the test whose input stem is `stem`
    pub fn golden_dir(&self, stem: &str) -> PathBuf {
        self.base_dir
            .join(&self.golden_root)
            .join(&self.trace)
            .join(stem)
    }

    /// Directory the simulator writes statistics to
    pub fn result_path(&self) -> PathBuf {
        self.base_dir.join(&self.result_dir)
    }

    /// Simulator timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_layout() {
        let config = HarnessConfig::default();
        assert_eq!(config.trace, "hotspot");
        assert_eq!(config.input_pattern, "sdl*.xml");
        assert!(config.timeout().is_none());
        assert_eq!(
            config.golden_dir("sdl1"),
            Path::new(".").join("references").join("hotspot").join("sdl1")
        );
        assert_eq!(config.result_path(), Path::new(".").join("results"));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = HarnessConfig::from_toml("").unwrap();
        assert_eq!(config.trace, "hotspot");
        assert_eq!(config.base_dir, PathBuf::from("."));
    }

    #[test]
    fn test_toml_overrides() {
        let config = HarnessConfig::from_toml(
            r#"
            trace = "stream"
            timeout_secs = 60
            "#,
        )
        .unwrap()
        .with_base_dir("/work/tests");
        assert_eq!(config.golden_dir("sdl2"), PathBuf::from("/work/tests/references/stream/sdl2"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
        assert_eq!(config.input_pattern, "sdl*.xml");
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = HarnessConfig::from_toml("timeout_secs = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_fixed_policy_keys_are_rejected() {
        for key in [
            "simulator = \"sst-dev\"",
            "ignored_prefixes = [\"HOST\"]",
            "stray_files = []",
            "stat_suffix = \".csv\"",
        ] {
            let err = HarnessConfig::from_toml(key).unwrap_err();
            assert!(matches!(err, Error::ConfigParse(_)), "accepted {key}");
        }
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = HarnessConfig::from_toml("trace = [").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HarnessConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
