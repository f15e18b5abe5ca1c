//! # CLI Layer
//!
//! This module is **one possible UI client** for the library: an interactive menu on a
//! terminal. It is the only place that reads stdin, writes stdout, or decides exit codes.
//!
//! - `run()`: parses flags, sets up logging and config, then hands stdin/stdout to the shell
//! - [`Shell`](super::shell::Shell): the menu state machine, generic over its input and output
//! - `render`: turns `CmdResult`s and errors into text

use super::setup::{init_logging, Cli};
use super::shell::Shell;
use clap::Parser;
use libranet::api::LibraApi;
use libranet::config::LibraConfig;
use libranet::error::Result;
use std::io;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    if !config.color {
        colored::control::set_override(false);
    }

    let api = LibraApi::seeded()?;
    tracing::debug!("catalogue seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(api, stdin.lock(), stdout.lock(), config);
    shell.run()
}

fn load_config(cli: &Cli) -> Result<LibraConfig> {
    let mut config = match &cli.config {
        Some(path) => LibraConfig::load(path)?,
        None => LibraConfig::default(),
    };
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}
