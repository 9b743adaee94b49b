//! indicators-cli - inspect indicator spreadsheets and generate SQL seeds

mod cli;
mod config;
mod indicators;
mod inspect;
mod seed;
mod sheet;

use anyhow::Result;
use clap::Parser;

use cli::commands::{
    inspect::handle_inspect_command, seed::handle_seed_command,
    template::handle_template_command,
};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    log::debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Inspect(args) => handle_inspect_command(args, &config),
        Commands::Seed(args) => handle_seed_command(args, &config),
        Commands::Template(args) => handle_template_command(args),
    }
}

/// Initialize env_logger; RUST_LOG takes precedence over -v flags
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
