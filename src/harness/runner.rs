//! Simulator invocation
//!
//! Runs `<simulator> <input>` in the base directory with stdout discarded and
//! stderr passed through. The exit status never decides a case; a simulator
//! that crashes simply leaves statistics missing for the comparator to find.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// How a simulator invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Process exited; `None` when terminated by a signal
    Exited(Option<i32>),
    /// Killed after exceeding the configured timeout
    TimedOut(Duration),
    /// Process could not be started
    SpawnFailed(String),
}

/// Run `simulator` on `input` with `cwd` as working directory
///
/// Waits indefinitely unless `timeout` is set, in which case the process is
/// killed once it expires.
pub async fn run_simulator(
    simulator: &Path,
    input: &str,
    cwd: &Path,
    timeout: Option<Duration>,
) -> RunStatus {
    let mut child = match Command::new(simulator)
        .arg(input)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(input, error = %e, "Failed to start simulator");
            return RunStatus::SpawnFailed(e.to_string());
        }
    };

    let waited = match timeout {
        Some(limit) => {
            let waited = tokio::time::timeout(limit, child.wait()).await;
            match waited {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        input,
                        timeout_secs = limit.as_secs_f64(),
                        "Simulator timed out, killing it"
                    );
                    if let Err(e) = child.kill().await {
                        tracing::debug!(input, error = %e, "Could not kill simulator");
                    }
                    return RunStatus::TimedOut(limit);
                }
            }
        }
        None => child.wait().await,
    };

    match waited {
        Ok(status) => {
            tracing::debug!(input, code = ?status.code(), "Simulator exited");
            RunStatus::Exited(status.code())
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "Failed waiting for simulator");
            RunStatus::SpawnFailed(e.to_string())
        }
    }
}
