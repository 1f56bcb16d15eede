//! controller
//!
//! Owns the in-memory inventory and runs the user-facing operations.
//!
//! # Lifecycle
//!
//! [`Controller::open`] loads the inventory file once. Every operation then
//! works on the in-memory [`Inventory`]; the mutating ones (capture and
//! restock) rewrite the whole file before returning. No other component
//! holds references into the inventory.
//!
//! # Errors
//!
//! Two failure kinds end the session:
//! - the inventory file is missing ([`StoreError::NotFound`])
//! - a min/max query runs against an empty inventory
//!   ([`ControllerError::EmptyInventory`])
//!
//! Bad interactive answers never fail; the prompts just ask again.
//!
//! # Modules
//!
//! - [`capture`] - Adding a new shoe
//! - [`restock`] - Restocking the lowest-quantity shoe
//! - [`search`] - Looking shoes up by code
//! - [`menu`] - The numbered main menu

pub mod capture;
pub mod menu;
pub mod restock;
pub mod search;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::core::config::{Config, ConfigError};
use crate::core::inventory::Inventory;
use crate::core::shoe::group_thousands;
use crate::core::store::{InventoryStore, StoreError};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{PromptError, Prompter};

/// Warning shown once after loading when any row was dropped.
pub const FORMAT_WARNING: &str = "!!! Check inventory file for incorrect formatting !!!";

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Inventory file override.
    pub file: Option<PathBuf>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (results only).
    pub quiet: bool,
}

/// Settings a controller runs with, after config and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory_file: PathBuf,
    pub code_prefix: String,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Merge the config file with CLI flags; flags win.
    pub fn resolve(ctx: &Context) -> Result<Self, ConfigError> {
        let config = Config::load(ctx.config.as_deref())?;
        let settings = Self {
            inventory_file: ctx.file.clone().unwrap_or_else(|| config.inventory_file()),
            code_prefix: config.code_prefix().to_string(),
            verbosity: Verbosity::from_flags(ctx.quiet, ctx.debug),
        };
        debug!(
            file = %settings.inventory_file.display(),
            prefix = %settings.code_prefix,
            "resolved settings"
        );
        Ok(settings)
    }
}

/// Errors from controller operations.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Reading or writing the inventory file failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A query needed at least one shoe.
    #[error("the inventory is empty, add a shoe first")]
    EmptyInventory,

    /// A restock amount would take the quantity outside the `i64` range.
    #[error("adding {amount} to a quantity of {quantity} is out of range")]
    QuantityOutOfRange { quantity: i64, amount: i64 },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Writing console output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ControllerError {
    /// True when the user closed input mid-prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ControllerError::Prompt(PromptError::Cancelled))
    }
}

/// The inventory controller.
pub struct Controller<R, W> {
    store: InventoryStore,
    inventory: Inventory,
    code_prefix: String,
    verbosity: Verbosity,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Load the inventory file and build a controller around it.
    ///
    /// Prints a single formatting warning if any row was dropped.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the file does not exist
    /// - [`StoreError::ReadError`] if it cannot be read
    pub fn open(settings: Settings, prompter: Prompter<R, W>) -> Result<Self, ControllerError> {
        let store = InventoryStore::new(settings.inventory_file);
        let report = store.load()?;

        let mut controller = Self {
            store,
            inventory: report.inventory,
            code_prefix: settings.code_prefix,
            verbosity: settings.verbosity,
            prompter,
        };
        if report.skipped_rows > 0 {
            writeln!(controller.prompter.output(), "\n{}\n", FORMAT_WARNING)?;
        }
        Ok(controller)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn code_prefix(&self) -> &str {
        &self.code_prefix
    }

    /// Give back the prompter, e.g. to inspect a scripted session.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Rewrite the inventory file from memory.
    pub fn persist(&mut self) -> Result<(), ControllerError> {
        self.store.persist(&self.inventory)?;
        Ok(())
    }

    /// Print the whole inventory as a table.
    pub fn view_all(&mut self) -> Result<(), ControllerError> {
        output::write_table(self.prompter.output(), &self.inventory)?;
        Ok(())
    }

    /// Print the stock value of every shoe, then the total.
    pub fn value_per_item(&mut self) -> Result<(), ControllerError> {
        let out = self.prompter.output();
        writeln!(out, "Stock value per item...")?;
        for shoe in &self.inventory {
            writeln!(
                out,
                "\t{:<9} {:<25} {:>12}",
                shoe.code(),
                shoe.product(),
                group_thousands(shoe.value())
            )?;
        }
        output::write_total(out, self.inventory.total_value())?;
        Ok(())
    }

    /// Show the shoe with the most stock.
    ///
    /// # Errors
    ///
    /// [`ControllerError::EmptyInventory`] if there are no shoes.
    pub fn highest_quantity(&mut self) -> Result<(), ControllerError> {
        let shoe = self
            .inventory
            .highest_quantity()
            .ok_or(ControllerError::EmptyInventory)?;

        let out = self.prompter.output();
        writeln!(out, "Shoe with the highest quantity in stock...")?;
        output::write_table(out, [shoe])?;
        writeln!(out, "\n{} is now for sale!", shoe.product())?;
        Ok(())
    }

    /// Status line, suppressed in quiet mode.
    fn status(&mut self, message: &str) -> io::Result<()> {
        if self.verbosity.is_quiet() {
            return Ok(());
        }
        writeln!(self.prompter.output(), "{}", message)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    pub const SAMPLE: &str = "\
Country,Code,Product,Cost,Quantity
South Africa,SKU44386,Air Max 90,2300,20
China,SKU90000,Jordan 1,3200,50
Vietnam,SKU63221,Blazer,1700,19
";

    pub type Scripted = Controller<Cursor<Vec<u8>>, Vec<u8>>;

    /// A temp inventory file plus a controller reading `input`.
    pub fn scripted(contents: &str, input: &str) -> (TempDir, Scripted) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventory.txt");
        fs::write(&path, contents).unwrap();
        let settings = Settings {
            inventory_file: path,
            code_prefix: "SKU".to_string(),
            verbosity: Verbosity::Normal,
        };
        let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let controller = Controller::open(settings, prompter).unwrap();
        (temp, controller)
    }

    pub fn printed(controller: Scripted) -> String {
        String::from_utf8(controller.into_prompter().into_parts().1).unwrap()
    }

    pub fn file_text(temp: &TempDir) -> String {
        fs::read_to_string(temp.path().join("inventory.txt")).unwrap()
    }
}
