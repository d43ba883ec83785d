//! Snapcap - screenshot-run launcher
//!
//! Main entry point for the CLI application.

use clap::Parser;
use snapcap::{Config, Launcher};

/// Snapcap - start the local web app if needed and capture screenshots
///
/// All positional arguments are forwarded verbatim to the capture tool;
/// the launcher defines no flags of its own.
#[derive(Parser, Debug)]
#[command(name = "snapcap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Arguments forwarded unmodified to the capture tool
    ///
    /// Hyphen-prefixed tokens pass through, except `--help`/`--version`
    /// which clap claims for the launcher itself; prefix the list with `--`
    /// to forward even those verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    capture_args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load();
    let mut launcher = Launcher::with_config(config);

    // Step failures are reported inside the sequence; the launcher itself
    // exits 0 once the sequence has run to completion.
    launcher.run(&args.capture_args).await?;

    Ok(())
}
