//! Priosort - cause-weighted priority ordering for build queues.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use priosort::cli::{Cli, Commands, init, order, weights};
use priosort::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { force } => init::init_config(&cli.config, *force),
        Commands::Weights { args } => weights::run_weights(args, &cli.config),
        Commands::Order { args } => order::run_order(args, &cli.config),
    }
}
