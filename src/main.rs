mod demo;
mod dispatcher;
mod error;
mod shell;
mod types;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::dispatcher::Dispatcher;

/// Two-lane task dispatcher with an interactive console.
#[derive(Parser)]
#[command(name = "taskdeck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scripted demo and print a summary.
    Demo,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Demo) => {
            if let Err(err) = demo::run_demo() {
                error!(%err, "demo failed");
                return ExitCode::FAILURE;
            }
        }
        None => {
            let mut dispatcher = Dispatcher::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(err) = shell::run(&mut dispatcher, stdin.lock(), stdout.lock()) {
                error!(%err, "console session failed");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
