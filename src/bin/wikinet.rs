// src/bin/wikinet.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use wikinet_core::cli::handlers;
use wikinet_core::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wikinet_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = handlers::load_config(cli)?;
    match &cli.command {
        Commands::Explore(args) => handlers::handle_explore(config, args)?,
        Commands::People(args) => handlers::handle_people(&config, args)?,
    }
    Ok(())
}
