//! CLI command handling
//!
//! Builds the harness configuration from the command line and dispatches.

use crate::commands::{Commands, HarnessArgs};
use crate::common::{Error, HarnessConfig, Result};
use crate::harness::Harness;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, args: HarnessArgs) -> Result<()> {
    let harness = Harness::new(build_config(&args)?);

    match command {
        Commands::Run => {
            let mut out = std::io::stdout();
            harness.run(&mut out).await?;
            Ok(())
        }

        Commands::List => {
            for test in harness.discover()? {
                println!("{}\t{}", test.file_name, test.golden_dir.display());
            }
            Ok(())
        }
    }
}

/// Merge the configuration file with command-line overrides
pub fn build_config(args: &HarnessArgs) -> Result<HarnessConfig> {
    let mut config = HarnessConfig::load(args.config.as_deref())?.with_base_dir(&args.dir);

    if let Some(secs) = args.timeout {
        if secs == 0 {
            return Err(Error::Config("--timeout must be at least 1 second".to_string()));
        }
        config.timeout_secs = Some(secs);
    }

    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(config: Option<PathBuf>, timeout: Option<u64>) -> HarnessArgs {
        HarnessArgs {
            dir: PathBuf::from("/work/sst-tests"),
            config,
            timeout,
            verbose: 0,
        }
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("regress.toml");
        std::fs::write(&file, "trace = \"stream\"\ntimeout_secs = 10\n").unwrap();

        let config = build_config(&args(Some(file), Some(90))).unwrap();
        assert_eq!(config.trace, "stream");
        assert_eq!(config.timeout_secs, Some(90));
        assert_eq!(config.base_dir, PathBuf::from("/work/sst-tests"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.toml");
        std::fs::write(&file, "").unwrap();

        let err = build_config(&args(Some(file), Some(0))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
