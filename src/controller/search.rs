//! controller::search
//!
//! Looking shoes up by code.
//!
//! The user types only the part of the code after the prefix. Codes are
//! not unique; when several shoes share one, the last in inventory order
//! is shown.

use std::io::{BufRead, Write};

use super::{Controller, ControllerError};
use crate::core::shoe::{prefixed_code, Shoe};
use crate::ui::output;

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Find a shoe by code, accepting the code with or without its prefix.
    pub fn lookup(&self, code: &str) -> Option<&Shoe> {
        self.inventory
            .find_by_code(code)
            .or_else(|| self.inventory.find_by_code(&prefixed_code(&self.code_prefix, code)))
    }

    /// Interactive search.
    ///
    /// Asks for a code until one matches, shows the match, then offers to
    /// search again.
    pub fn search_by_code(&mut self) -> Result<(), ControllerError> {
        loop {
            loop {
                writeln!(
                    self.prompter.output(),
                    "\nEnter shoe code for the shoe details you're after..."
                )?;
                let suffix = self
                    .prompter
                    .text(&format!("Code: {}", self.code_prefix))?;
                let code = prefixed_code(&self.code_prefix, &suffix);

                if let Some(shoe) = self.inventory.find_by_code(&code) {
                    let out = self.prompter.output();
                    writeln!(out, "Search result:")?;
                    output::write_table(out, [shoe])?;
                    break;
                }

                writeln!(self.prompter.output(), "\nShoe code not in the inventory list...")?;
            }

            if !self
                .prompter
                .confirm("\nWould you like to search again? (y/n): ")?
            {
                return Ok(());
            }
        }
    }
}
