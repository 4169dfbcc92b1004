//! Regression harness
//!
//! Drives the pipeline for every input file: run the simulator, compare its
//! statistics with the golden tree, print one report line, clean up.
//! Cases run strictly one after another since they share `results/`.

mod cleanup;
mod compare;
mod diff;
mod discover;
mod locator;
mod report;
mod runner;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::{HarnessConfig, Result};

pub use cleanup::{clean_case_artifacts, STRAY_FILES};
pub use compare::{compare_dirs, first_mismatch, Verdict, IGNORED_PREFIX, STAT_SUFFIX};
pub use diff::{line_diff, removed_lines, DiffLine, LineKind};
pub use discover::{discover_tests, glob_match, TestCase};
pub use locator::{locate_simulator, SIMULATOR};
pub use report::write_outcome;
pub use runner::{run_simulator, RunStatus};

/// Result of one test case
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub test: TestCase,
    pub run: RunStatus,
    pub verdict: Verdict,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }
}

/// Outcomes of a whole run, in report order
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub outcomes: Vec<CaseOutcome>,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Harness bound to one configuration
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Find the simulator executable
    pub fn locate(&self) -> Result<PathBuf> {
        locate_simulator(SIMULATOR, self.config.search_path.as_ref())
    }

    /// List the test cases
    pub fn discover(&self) -> Result<Vec<TestCase>> {
        discover_tests(&self.config)
    }

    /// Run every case, writing report lines to `out`
    ///
    /// Fails only when the simulator is missing, the base directory cannot be
    /// listed, or `out` cannot be written; failing cases are part of the
    /// returned summary.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Summary> {
        let simulator = self.locate()?;
        let tests = self.discover()?;
        tracing::info!(count = tests.len(), simulator = %simulator.display(), "Running tests");

        let mut summary = Summary::default();
        for test in tests {
            let outcome = self.run_case(&simulator, test).await;
            write_outcome(out, &outcome.test.file_name, outcome.passed())?;
            summary.outcomes.push(outcome);
        }

        tracing::info!(
            passed = summary.passed(),
            failed = summary.failed(),
            "Run complete"
        );
        Ok(summary)
    }

    /// Run, compare and clean up a single case
    pub async fn run_case(&self, simulator: &Path, test: TestCase) -> CaseOutcome {
        let config = &self.config;
        let run = run_simulator(simulator, &test.file_name, &config.base_dir, config.timeout()).await;

        let result_dir = config.result_path();
        let verdict = compare_dirs(&test.golden_dir, &result_dir).unwrap_or_else(|e| {
            tracing::error!(test = %test.file_name, error = %e, "Comparison aborted");
            Verdict::Unreadable(e.to_string())
        });

        match &verdict {
            Verdict::Pass => tracing::debug!(test = %test.file_name, "Statistics match"),
            Verdict::MissingOutput { file } => {
                tracing::info!(test = %test.file_name, file = %file, run = ?run, "Missing produced statistics")
            }
            Verdict::Mismatch { file, line } => {
                tracing::info!(test = %test.file_name, file = %file, line = %line, "Golden line missing from output")
            }
            Verdict::Unreadable(_) => {}
        }

        clean_case_artifacts(&config.base_dir, &result_dir);

        CaseOutcome { test, run, verdict }
    }
}
