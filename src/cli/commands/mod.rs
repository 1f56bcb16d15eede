//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves settings from the config file and global flags
//! 2. Opens a controller on the inventory file
//! 3. Runs one controller operation
//!
//! Handlers never touch the inventory file directly.

mod completion;
mod config_cmd;
mod menu;
mod report;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use menu::menu;
pub use report::{highest, list, lowest, search, values};

use crate::cli::args::{Command, ConfigAction};
use crate::controller::{Context, Controller, Settings};
use crate::ui::prompts::StdPrompter;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Option<Command>, ctx: &Context) -> Result<()> {
    match command.unwrap_or(Command::Menu) {
        Command::Menu => menu::menu(ctx),
        Command::List => report::list(ctx),
        Command::Search { code } => report::search(ctx, &code),
        Command::Highest => report::highest(ctx),
        Command::Lowest => report::lowest(ctx),
        Command::Values => report::values(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Open a controller on the terminal.
fn open(ctx: &Context) -> Result<Controller<std::io::StdinLock<'static>, std::io::Stdout>> {
    let settings = Settings::resolve(ctx).context("Failed to load config")?;
    Ok(Controller::open(settings, StdPrompter::stdio())?)
}
