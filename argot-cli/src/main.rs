//! argot command-line entry point.
//!
//! Exercises the binding pipeline end-to-end without any chat transport:
//! bind an argument string against one action definition, render the
//! execution request for a full command line against a catalog, or list
//! the actions a catalog contains.

mod args;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use argot_core::{ActionDefinition, Binder, Catalog, parse_command};

use args::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    match cli.command {
        Command::Bind { action, argstring } => {
            let action = ActionDefinition::from_file(&action)?;
            debug!(action = %action.name, "binding against action definition");

            let bound = Binder::new(action.parameters).bind(&argstring);
            print_json(&Value::Object(bound), cli.raw)?;
        }
        Command::Request { catalog, command } => {
            let catalog = load_catalog(catalog)?;

            let invocation = parse_command(&command, &catalog)?;
            debug!(action = %invocation.action, "resolved command");

            let request = invocation.into_request();
            print_json(&serde_json::to_value(&request)?, cli.raw)?;
        }
        Command::Actions { catalog } => {
            let catalog = load_catalog(catalog)?;

            for action in catalog.actions() {
                if action.description.is_empty() {
                    println!("{}", action.name.bold());
                } else {
                    println!("{}  {}", action.name.bold(), action.description);
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(dir: Option<PathBuf>) -> Result<Catalog> {
    let dir = match dir {
        Some(dir) => dir,
        None => Catalog::default_dir()?,
    };
    debug!(dir = %dir.display(), "loading action catalog");

    Catalog::load(&dir).with_context(|| format!("Failed to load catalog from {}", dir.display()))
}

fn print_json(value: &Value, raw: bool) -> Result<()> {
    if raw {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    // Filter based on the debug flag, mirroring RUST_LOG syntax
    let filter = if debug {
        "argot_cli=debug,argot_core=debug"
    } else {
        "argot_cli=info,argot_core=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
