//! Command-line interface for git-httpd-config
//!
//! Loads the git-httpd configuration file and reports problems with it. The
//! usage text embeds a rendered example config instead of clap's default help.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_file;
use crate::render::{build_usage, render_example};
use crate::service::{self, GitHttpdConfig, DEFAULT_CONFIG_PATH};

mod utils;

pub use utils::flag_descriptions;

/// Check and print git-httpd configuration
#[derive(Parser, Debug)]
#[command(name = "git-httpd-config")]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the effective configuration to stdout
    #[arg(long)]
    dump_config: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Show usage and an example config file
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

/// Usage text for git-httpd, flags taken from [`Cli`].
pub fn usage() -> Result<String> {
    let flags = flag_descriptions(&Cli::command());
    build_usage(&service::help_page(), &service::example_config(), &flags)
        .context("Failed to render example config")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if cli.help {
        eprint!("{}", usage()?);
        return Ok(());
    }

    let mut config = GitHttpdConfig::default();
    if let Err(err) = load_file(&mut config, &cli.config) {
        eprint!("{}", usage()?);
        return Err(err.into());
    }
    tracing::info!(
        listen = %config.listen,
        repo_root = %config.repo_root,
        git_command = %config.git_command,
        "configuration loaded"
    );

    if cli.dump_config {
        print!("{}", render_example(&config)?);
    }

    Ok(())
}
