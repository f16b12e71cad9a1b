//! Entry point for the `zonelift` CLI.

mod cli;
mod commands;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, CompletionsArgs};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose, cli.global.quiet);

    match cli.command {
        Command::Zones(args) => commands::zones::handle(args, &cli.global).await?,
        Command::Records(args) => commands::records::handle(args, &cli.global).await?,
        Command::Export(args) => commands::export::handle(args, &cli.global).await?,
        Command::Completions(args) => completions(&args),
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Default level is `warn` so that dropped-duplicate diagnostics from zone
/// generation are visible without any flags; `-v` raises to info (redirect
/// substitutions), `-vv` to debug (HTTP requests), `-vvv` to trace.
/// `RUST_LOG` overrides everything.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "zonelift", &mut std::io::stdout());
}
