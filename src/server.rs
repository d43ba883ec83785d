//! Web app server startup
//!
//! Fire-and-forget spawning of the server entry point. The launcher never
//! supervises the server: the child handle is dropped at spawn time, there
//! is no restart logic and no way to stop it later.

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::core::{Config, Result, SnapcapError};

/// Spawner for the detached web app process
pub struct ServerHandle {
    command: String,
    args: Vec<String>,
    startup_delay: Duration,
}

impl ServerHandle {
    /// Create a handle from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            command: config.server.command.clone(),
            args: config.server.args.clone(),
            startup_delay: Duration::from_secs(config.server.startup_delay_secs),
        }
    }

    /// Start the server as a detached background process
    ///
    /// The child shares the launcher's console and is immediately forgotten;
    /// its exit code is never collected.
    pub fn spawn_detached(&self) -> Result<()> {
        let child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                SnapcapError::server(format!("Failed to start {}: {}", self.command, e))
            })?;

        // Fire and forget: dropping the handle detaches the child
        drop(child);
        Ok(())
    }

    /// Sleep for the fixed startup delay
    ///
    /// Not a readiness check. If the server needs longer than this to bind
    /// its port, the capture step races against an unready server.
    pub async fn wait_for_startup(&self) {
        tokio::time::sleep(self.startup_delay).await;
    }

    /// The configured startup delay
    pub fn startup_delay(&self) -> Duration {
        self.startup_delay
    }
}
