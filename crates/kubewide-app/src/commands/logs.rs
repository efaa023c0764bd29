use std::io::{self, Write};

use anyhow::Result;
use kubewide_config::LogsConfig;
use kubewide_core::logs::{channel, drain};
use kubewide_core::{KubeClient, KwError, LogQuery};
use kubewide_output::LogFormatter;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::Environment;
use crate::cli::LogsArgs;

pub async fn run(args: &LogsArgs, env: &Environment, out: &mut dyn Write) -> Result<i32> {
    let query = build_query(args, &env.config.logs)?;
    let mut formatter = formatter(args, &env.config.logs);

    let client = KubeClient::from_file(&env.kubeconfig).await?;
    let cancel = CancellationToken::new();
    spawn_interrupt_watcher(cancel.clone());

    let (tx, rx) = channel();
    let report = client.stream_logs(&query, tx, cancel.clone()).await?;
    for failure in &report.failures {
        eprintln!("{failure}");
    }
    debug!(opened = report.opened, failed = report.failures.len(), "log streams started");

    let result = drain(rx, cancel.clone(), |line| writeln!(out, "{}", formatter.format(&line))).await;
    cancel.cancel();

    match result {
        Ok(delivered) => debug!(delivered, "log streaming finished"),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => debug!("stdout closed"),
        Err(e) => return Err(e.into()),
    }
    Ok(0)
}

/// Flags win over the config file. A `--tail` of zero or less asks for the
/// whole log, the same as `tail-lines = 0`.
pub fn build_query(args: &LogsArgs, config: &LogsConfig) -> Result<LogQuery, KwError> {
    let namespace = args.namespace.clone().filter(|ns| !ns.is_empty()).ok_or(KwError::MissingNamespace)?;
    let tail_lines = match args.tail {
        Some(n) => (n > 0).then_some(n),
        None => config.tail(),
    };

    Ok(LogQuery {
        namespace,
        pod: args.pod.clone(),
        container: args.container.clone(),
        tail_lines,
        timestamps: args.timestamps || config.timestamps,
    })
}

pub fn formatter(args: &LogsArgs, config: &LogsConfig) -> LogFormatter {
    LogFormatter::new(config.min_key_width, config.color && !args.no_color)
}

fn spawn_interrupt_watcher(cancel: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            signal = tokio::signal::ctrl_c() => {
                if signal.is_ok() {
                    debug!("interrupt received, closing log streams");
                    cancel.cancel();
                }
            }
        }
    });
}
