//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Single source of truth for terminal colors.
#[derive(Debug, Parser)]
#[command(name = "tint", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the preference file (default: ~/.terminal-theme).
    #[arg(long = "prefs-file", value_name = "PATH", global = true)]
    pub prefs_file: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all available themes.
    List,
    /// Print the current or specified theme as JSON.
    Get {
        /// Theme name; defaults to the active theme.
        name: Option<String>,
    },
    /// Set the active theme and persist the choice.
    Set {
        /// Theme name to activate.
        name: String,
    },
    /// Print shell export statements for the active theme.
    Apply,
    /// Write shell export statements for the active theme to a file.
    Export {
        /// Output file path.
        file: PathBuf,
    },
}
