//! Read-only commands - list, search, highest, lowest, values
//!
//! None of these prompt or write the inventory file.

use crate::controller::Context;
use crate::ui::output;
use anyhow::{bail, Result};
use std::io::Write;

/// Print the whole inventory.
pub fn list(ctx: &Context) -> Result<()> {
    super::open(ctx)?.view_all()?;
    Ok(())
}

/// Print the shoe with the given code.
pub fn search(ctx: &Context, code: &str) -> Result<()> {
    let controller = super::open(ctx)?;
    let Some(shoe) = controller.lookup(code) else {
        bail!("shoe code '{}' not in the inventory", code);
    };

    let mut stdout = std::io::stdout().lock();
    output::write_table(&mut stdout, [shoe])?;
    stdout.flush()?;
    Ok(())
}

/// Print the shoe with the most stock.
pub fn highest(ctx: &Context) -> Result<()> {
    super::open(ctx)?.highest_quantity()?;
    Ok(())
}

/// Print the shoe with the least stock without restocking it.
pub fn lowest(ctx: &Context) -> Result<()> {
    super::open(ctx)?.show_lowest()?;
    Ok(())
}

/// Print the value of every shoe and the total.
pub fn values(ctx: &Context) -> Result<()> {
    super::open(ctx)?.value_per_item()?;
    Ok(())
}
