mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{inspect, mcp, state, watch, InspectArgs, McpArgs, StateArgs, WatchArgs};

/// Situ CLI - inspect and watch reconciled design edits
#[derive(Parser, Debug)]
#[command(name = "situ")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable tracing output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the original/updated diff for one element
    Inspect(InspectArgs),

    /// Show which categories of an element carry edits
    State(StateArgs),

    /// Re-render an element's diff on every edit log change
    Watch(WatchArgs),

    /// Fetch edits from the local MCP endpoint
    Mcp(McpArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt::init();
    }

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Inspect(args) => inspect(args, &cwd),
        Command::State(args) => state(args, &cwd),
        Command::Watch(args) => watch(args, &cwd),
        Command::Mcp(args) => mcp(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
