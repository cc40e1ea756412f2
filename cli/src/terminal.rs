use colored::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lanscout_common::envelope::Failure;
use lanscout_common::error::DiscoveryError;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a success envelope as pretty JSON on stdout.
pub fn render<T: Serialize>(body: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

/// Prints the failure envelope on stdout, a colored status line on
/// stderr, and carries the error out for a non-zero exit.
pub fn render_failure(err: DiscoveryError) -> anyhow::Result<()> {
    let status = err.status_code();
    println!("{}", serde_json::to_string_pretty(&Failure::new(&err))?);
    eprintln!("{}", format!("[{status}] {err}").red().bold());
    Err(err.into())
}
