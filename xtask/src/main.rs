#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{coverage, install, recipe};
use crate::models::args::{AppCommands, Cli};
use crate::models::config::ToolingConfig;

use anyhow::{Context, Result};
use clap::Parser;
use vio_kernel::config::load_config;
use vio_logger::{LevelFilter, LoggerBuilder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ToolingConfig =
        load_config(cli.config.as_deref()).context("Failed to load tooling configuration")?;

    let mut logger = LoggerBuilder::from_config("xtask", &config.logging)?;
    if cli.verbose {
        logger = logger.level(LevelFilter::DEBUG);
    }
    let _logger = logger.init()?;

    match cli.command {
        AppCommands::Install { build_type, profile } => {
            install::run_install(&config.install, build_type, &profile)?;
        },
        AppCommands::Coverage { compiler, compiler_version } => {
            coverage::run_coverage(&config.coverage, compiler, &compiler_version)?;
        },
        AppCommands::Recipe { action } => recipe::handle_recipe_command(&config.recipe, action)?,
    }

    Ok(())
}
