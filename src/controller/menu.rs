//! controller::menu
//!
//! The numbered main menu.
//!
//! The menu loops until the user picks `0` or input ends. A choice that is
//! not a number, or not on the menu, just shows the menu again. Errors from
//! an operation end the loop and are returned to the caller.

use std::io::{BufRead, Write};

use super::{Controller, ControllerError};

/// Menu text shown before every selection.
pub const MENU: &str = "
Please select from the following menu:
\t1) View whole inventory
\t2) Search for a shoe in inventory using SKU code
\t3) Input new shoe detail into inventory
\t4) Restock the lowest quantity of a shoe in inventory
\t5) View highest quantity of a shoe in inventory
\t6) View stock value per item

\t0) Quit program

\tEnter selection: ";

pub const FAREWELL: &str = "\nThank you for using the Shoe Inventory Program!";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    ViewAll,
    Search,
    Capture,
    Restock,
    HighestQuantity,
    ValuePerItem,
}

impl MenuChoice {
    /// Map a typed number to a menu entry.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(MenuChoice::Quit),
            1 => Some(MenuChoice::ViewAll),
            2 => Some(MenuChoice::Search),
            3 => Some(MenuChoice::Capture),
            4 => Some(MenuChoice::Restock),
            5 => Some(MenuChoice::HighestQuantity),
            6 => Some(MenuChoice::ValuePerItem),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Run the main menu until the user quits.
    ///
    /// End of input counts as quitting.
    pub fn run_menu(&mut self) -> Result<(), ControllerError> {
        match self.menu_loop() {
            Err(e) if e.is_cancelled() => {
                writeln!(self.prompter.output())?;
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), ControllerError> {
        loop {
            let Some(number) = self.prompter.try_integer(MENU)? else {
                writeln!(
                    self.prompter.output(),
                    "\nEnter a number from the list, please try again..."
                )?;
                continue;
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::Quit) => {
                    writeln!(self.prompter.output(), "{}", FAREWELL)?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(
                    self.prompter.output(),
                    "Please enter a number from the menu list, try again..."
                )?,
            }
        }
    }

    /// Run the operation behind one menu entry.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ControllerError> {
        match choice {
            MenuChoice::Quit => Ok(()),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::Search => self.search_by_code(),
            MenuChoice::Capture => self.capture(),
            MenuChoice::Restock => self.restock(),
            MenuChoice::HighestQuantity => self.highest_quantity(),
            MenuChoice::ValuePerItem => self.value_per_item(),
        }
    }
}
