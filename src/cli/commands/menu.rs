//! menu command - Interactive inventory menu

use crate::controller::Context;
use anyhow::Result;

/// Run the interactive menu until the user quits.
pub fn menu(ctx: &Context) -> Result<()> {
    println!("Shoe Inventory Program");
    let mut controller = super::open(ctx)?;
    controller.run_menu()?;
    Ok(())
}
