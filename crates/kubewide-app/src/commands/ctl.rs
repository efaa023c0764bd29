use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

pub const KUBECTL: &str = "kubectl";

/// Runs kubectl with `args` on the inherited terminal and returns its exit
/// code. A child killed by a signal reports 1.
pub async fn run(args: &[String]) -> Result<i32> {
    run_program(KUBECTL, args).await
}

async fn run_program(program: &str, args: &[String]) -> Result<i32> {
    debug!(program, ?args, "forwarding");
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .with_context(|| format!("failed to run {program}"))?;
    Ok(status.code().unwrap_or(1))
}
