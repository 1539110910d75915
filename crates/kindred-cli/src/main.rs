use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "kindred",
    version,
    about = "Browse and edit a genealogical record stored as a compact binary file"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Family tree file to operate on
    #[arg(short, long, global = true, env = "KINDRED_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let file = cli.file.as_deref();

    match &cli.command {
        commands::Commands::Add(args) => commands::add::run(args, file),
        commands::Commands::List => commands::list::run(file, cli.format),
        commands::Commands::Show(args) => commands::show::run(args, file, cli.format),
        commands::Commands::Find(args) => commands::find::run(args, file),
        commands::Commands::Rename(args) => commands::rename::run(args, file),
        commands::Commands::Link(args) => commands::link::run(args, file),
        commands::Commands::Unlink(args) => commands::unlink::run(args, file),
        commands::Commands::Remove(args) => commands::remove::run(args, file),
        commands::Commands::Relation(args) => commands::relation::run(args, file, cli.format),
        commands::Commands::Shell => commands::shell::run(file),
    }
}
