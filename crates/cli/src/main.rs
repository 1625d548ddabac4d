// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tarmac — static reachability analysis over CD pipeline declarations.

mod color;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tarmac",
    version,
    about = "Answers what a pipeline would trigger, without running it",
    styles = color::styles()
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the dependency graph reachable from a resource
    Graph(commands::graph::GraphArgs),
    /// Print a pipeline's classified trigger and product indices
    Show(commands::show::ShowArgs),
    /// Walk commits, reporting the resources each would trigger
    Log(commands::log::LogArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Graph(args) => commands::graph::handle(args, cli.format).await,
        Command::Show(args) => commands::show::handle(args, cli.format).await,
        Command::Log(args) => commands::log::handle(args, cli.format).await,
    }
}
