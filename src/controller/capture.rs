//! controller::capture
//!
//! Adding a new shoe from interactive input.

use std::io::{BufRead, Write};

use super::{Controller, ControllerError};
use crate::core::shoe::{prefixed_code, Shoe};

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Ask for the five shoe fields, confirm them, then append and persist.
    ///
    /// Country, code and product accept any text. Cost and quantity must
    /// be integers; if either is not, both are asked for again. Answering
    /// `n` at the confirmation starts over from the country.
    pub fn capture(&mut self) -> Result<(), ControllerError> {
        loop {
            writeln!(self.prompter.output(), "\nPlease enter shoe details...")?;
            let country = self.prompter.text("\tCountry: ")?;
            let suffix = self
                .prompter
                .text(&format!("\tCode: {}", self.code_prefix))?;
            let code = prefixed_code(&self.code_prefix, &suffix);
            let product = self.prompter.text("\tProduct Name: ")?;

            let (cost, quantity) = loop {
                if let Some(cost) = self.prompter.try_integer("\tCost: ")? {
                    if let Some(quantity) = self.prompter.try_integer("\tQuantity: ")? {
                        break (cost, quantity);
                    }
                }
                writeln!(
                    self.prompter.output(),
                    "Enter a number value for cost and quantity. Try again...\n"
                )?;
            };

            writeln!(
                self.prompter.output(),
                "\nYou've entered the following details...\n\
                 \tCountry:    {country}\n\
                 \tCode:       {code}\n\
                 \tProduct:    {product}\n\
                 \tCost:       {cost}\n\
                 \tQuantity:   {quantity}\n"
            )?;

            if self.prompter.confirm("Are these shoe details correct? (y/n): ")? {
                let shoe = Shoe::new(country, code, product, cost, quantity);
                writeln!(
                    self.prompter.output(),
                    "\nNew product: {} with code {} entered into inventory",
                    shoe.product(),
                    shoe.code()
                )?;
                self.add(shoe)?;
                self.status("Inventory file updated...")?;
                return Ok(());
            }
        }
    }

    /// Append a shoe and rewrite the inventory file.
    pub fn add(&mut self, shoe: Shoe) -> Result<(), ControllerError> {
        self.inventory.push(shoe);
        self.persist()
    }
}
