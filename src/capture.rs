//! Screenshot capture tool invocation
//!
//! Runs the external capture script as a blocking foreground child. The
//! launcher's own CLI arguments are appended verbatim and in order after the
//! configured script arguments; no validation, no parsing.

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::core::{Config, Result, SnapcapError};

/// Runner for the external screenshot capture tool
pub struct CaptureRunner {
    command: String,
    args: Vec<String>,
}

impl CaptureRunner {
    /// Create a runner from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            command: config.capture.command.clone(),
            args: config.capture.args.clone(),
        }
    }

    /// Build the full argument list: configured args, then forwarded args
    fn full_args(&self, forwarded: &[String]) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(forwarded.iter().cloned());
        args
    }

    /// Run the capture tool, blocking until it exits
    ///
    /// The child shares the launcher's console. No timeout: if the tool
    /// hangs, the launcher hangs with it.
    pub async fn run(&self, forwarded: &[String]) -> Result<ExitStatus> {
        let status = Command::new(&self.command)
            .args(self.full_args(forwarded))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                SnapcapError::capture(format!("Failed to run {}: {}", self.command, e))
            })?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_args_forwarded_in_order() {
        let runner = CaptureRunner::new(&Config::default());
        let forwarded = vec!["--mobile".to_string(), "--portfolio".to_string()];
        assert_eq!(
            runner.full_args(&forwarded),
            vec![
                "scripts/capture_screenshots.py",
                "--mobile",
                "--portfolio"
            ]
        );
    }

    #[test]
    fn test_empty_forwarded_args() {
        let runner = CaptureRunner::new(&Config::default());
        assert_eq!(runner.full_args(&[]), vec!["scripts/capture_screenshots.py"]);
    }

    #[test]
    fn test_hyphen_values_pass_through_untouched() {
        let runner = CaptureRunner::new(&Config::default());
        let forwarded = vec!["--out".to_string(), "foo.png".to_string()];
        let args = runner.full_args(&forwarded);
        assert_eq!(&args[1..], &["--out", "foo.png"]);
    }

    #[tokio::test]
    async fn test_missing_command_errors() {
        let mut config = Config::default();
        config.capture.command = "snapcap-no-such-binary".to_string();
        let runner = CaptureRunner::new(&config);
        assert!(runner.run(&[]).await.is_err());
    }
}
