//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--file <path>`: Inventory file to use
//! - `--config <path>`: Config file to use
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Results only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shoes - manage a file-backed shoe inventory
#[derive(Parser, Debug)]
#[command(name = "shoes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inventory file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to load instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Results only; no status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu (the default)
    #[command(
        name = "menu",
        long_about = "Open the interactive inventory menu.\n\n\
            From the menu you can view the inventory, search by code, add new \
            shoes, restock the shoe with the least stock, and view the shoe \
            with the most stock or the value of every item. Adding and \
            restocking rewrite the inventory file immediately.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Open the menu on the default inventory file
    shoes

    # Work on a different file
    shoes --file /srv/stock/inventory.txt menu"
    )]
    Menu,

    /// Print the whole inventory as a table
    #[command(name = "list", visible_alias = "ls")]
    List,

    /// Look up a shoe by code
    #[command(
        name = "search",
        long_about = "Look up a shoe by its code.\n\n\
            The code may be given with or without its prefix. If several shoes \
            share a code, the last one in the file is shown.",
        after_help = "\
WORKFLOW EXAMPLES:
    shoes search SKU44386
    shoes search 44386"
    )]
    Search {
        /// Shoe code, with or without the prefix
        code: String,
    },

    /// Show the shoe with the most stock
    #[command(name = "highest")]
    Highest,

    /// Show the shoe with the least stock (the restock candidate)
    #[command(name = "lowest")]
    Lowest,

    /// Show the stock value of every shoe and the total
    #[command(name = "values")]
    Values,

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    inventory_file    Path of the inventory file
    code_prefix       Literal every shoe code starts with (default: SKU)"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash
    shoes completion bash > ~/.local/share/bash-completion/completions/shoes

    # Zsh
    shoes completion zsh > ~/.zfunc/_shoes"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
