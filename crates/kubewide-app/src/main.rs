mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use kubewide_core::error::COMMAND_EXIT_CODE;
use kubewide_core::KwError;
use kubewide_output::FuzzySelector;

use crate::cli::{Cli, Command};
use crate::commands::Environment;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match dispatch(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code(&err)
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

async fn dispatch(command: Command) -> anyhow::Result<i32> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Ctx(args) => commands::ctx::run(&args, &Environment::from_env(), &FuzzySelector, &mut stdout),
        Command::Ns(args) => commands::ns::run(&args, &Environment::from_env(), &FuzzySelector, &mut stdout).await,
        Command::Logs(args) => commands::logs::run(&args, &Environment::from_env(), &mut stdout).await,
        Command::Ctl(args) => commands::ctl::run(&args.args).await,
        Command::External(args) => commands::ctl::run(&args).await,
    }
}

/// Preflight failures exit with 2, everything else with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<KwError>().map_or(COMMAND_EXIT_CODE, KwError::exit_code)
}
