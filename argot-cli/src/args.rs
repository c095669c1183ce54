use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments for the argot CLI
#[derive(Parser, Debug)]
#[command(author, version, about = "Typed argument binding for automation commands")]
pub struct Cli {
    /// Output compact JSON instead of pretty-printed
    #[arg(long, global = true, default_value_t = false)]
    pub raw: bool,

    /// Enable verbose debug output
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bind an argument string against a single action definition file
    Bind {
        /// Path to the action definition JSON file
        #[arg(long)]
        action: PathBuf,

        /// The raw argument string, quotes intact
        argstring: String,
    },

    /// Build the execution request for a full command line
    Request {
        /// Catalog directory (defaults to $ARGOT_CATALOG_DIR or ~/.argot/actions)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Command line: action reference followed by its arguments
        command: String,
    },

    /// List the actions a catalog contains
    Actions {
        /// Catalog directory (defaults to $ARGOT_CATALOG_DIR or ~/.argot/actions)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}
