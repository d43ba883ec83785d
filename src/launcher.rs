//! Launch sequence orchestration
//!
//! The whole workflow is one linear sequence with a single boolean branch:
//! banner, probe, conditional server start plus fixed delay, capture,
//! completion message, pause. Step failures are printed and swallowed; the
//! sequence never aborts early and no child exit code is propagated.

use std::io::{self, BufRead, Write};
use std::process::ExitStatus;

use crate::capture::CaptureRunner;
use crate::core::{Config, Result};
use crate::probe::ServerProbe;
use crate::server::ServerHandle;

/// What happened during one launch sequence
#[derive(Debug, Default)]
pub struct LaunchReport {
    /// Whether the probe found the server already reachable
    pub server_alive: bool,
    /// Whether the server-start step ran (and its spawn succeeded)
    pub server_spawned: bool,
    /// Exit status of the capture tool, if it could be started at all
    pub capture_status: Option<ExitStatus>,
    /// Console lines emitted by the launcher itself, in order
    pub messages: Vec<String>,
}

impl LaunchReport {
    /// True if a given launcher line was emitted
    pub fn printed(&self, line: &str) -> bool {
        self.messages.iter().any(|m| m == line)
    }
}

/// The launcher: probes, conditionally starts the server, runs capture
pub struct Launcher {
    config: Config,
    probe: ServerProbe,
    server: ServerHandle,
    capture: CaptureRunner,
}

impl Launcher {
    /// Create a launcher with loaded configuration
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    /// Create a launcher with the given configuration
    pub fn with_config(config: Config) -> Self {
        let probe = ServerProbe::new(&config);
        let server = ServerHandle::new(&config);
        let capture = CaptureRunner::new(&config);

        Self {
            config,
            probe,
            server,
            capture,
        }
    }

    /// Access the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full launch sequence, forwarding `args` to the capture tool
    ///
    /// Never aborts on step failure: probe misses, spawn errors, and
    /// non-zero capture exits are printed and the sequence continues. The
    /// completion message always prints.
    pub async fn run(&mut self, args: &[String]) -> Result<LaunchReport> {
        let mut report = LaunchReport::default();

        self.emit(&mut report, "=== Snapcap Screenshot Runner ===".to_string());

        report.server_alive = self.probe.is_alive().await;

        if report.server_alive {
            self.emit(
                &mut report,
                format!("Server already running at {}", self.probe.base_url()),
            );
        } else {
            self.emit(
                &mut report,
                "Server not running, starting it now...".to_string(),
            );
            match self.server.spawn_detached() {
                Ok(()) => report.server_spawned = true,
                Err(e) => self.emit(&mut report, format!("Warning: {}", e)),
            }
            self.server.wait_for_startup().await;
        }

        match self.capture.run(args).await {
            Ok(status) => {
                if !status.success() {
                    self.emit(
                        &mut report,
                        format!("Capture tool exited with {}", status),
                    );
                }
                report.capture_status = Some(status);
            }
            Err(e) => self.emit(&mut report, format!("Warning: {}", e)),
        }

        self.emit(
            &mut report,
            format!("Screenshots saved to: {}/", self.config.capture.output_dir),
        );

        if self.config.console.pause_on_exit {
            self.pause()?;
        }

        Ok(report)
    }

    /// Print a launcher line and record it in the report
    fn emit(&self, report: &mut LaunchReport, line: String) {
        println!("{}", line);
        report.messages.push(line);
    }

    /// Hold the console open until the user presses Enter
    fn pause(&self) -> Result<()> {
        print!("Press Enter to close...");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}
