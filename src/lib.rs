//! Snapcap - screenshot-run launcher for the local web app
//!
//! A thin orchestration shim: check whether the web app is already serving
//! on its local port, start it in the background if not, give it a moment to
//! bind, then run the external screenshot-capture tool with any forwarded
//! arguments and report where the screenshots landed.
//!
//! # Architecture
//!
//! - **Core**: Configuration and error handling
//! - **Probe**: One-shot HTTP liveness check
//! - **Server**: Fire-and-forget web app startup
//! - **Capture**: Blocking capture-tool invocation
//! - **Launcher**: The ordered launch sequence
//!
//! # Usage
//!
//! ```rust,no_run
//! use snapcap::Launcher;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut launcher = Launcher::new();
//!     launcher.run(&[]).await.unwrap();
//! }
//! ```

pub mod capture;
pub mod core;
pub mod launcher;
pub mod probe;
pub mod server;

// Re-export commonly used items
pub use capture::CaptureRunner;
pub use core::{Config, Result, SnapcapError};
pub use launcher::{LaunchReport, Launcher};
pub use probe::ServerProbe;
pub use server::ServerHandle;
