//! controller::restock
//!
//! Restocking the shoe with the least stock.

use std::io::{BufRead, Write};

use super::{Controller, ControllerError};
use crate::ui::output;

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Show the lowest-quantity shoe and return its index.
    ///
    /// On ties the first such shoe is chosen.
    ///
    /// # Errors
    ///
    /// [`ControllerError::EmptyInventory`] if there are no shoes.
    pub fn show_lowest(&mut self) -> Result<usize, ControllerError> {
        let index = self
            .inventory
            .lowest_quantity_index()
            .ok_or(ControllerError::EmptyInventory)?;

        let out = self.prompter.output();
        writeln!(out, "The shoe product with the lowest quantity in stock is...")?;
        output::write_table(out, &self.inventory.as_slice()[index..=index])?;
        Ok(index)
    }

    /// Offer to add stock to the lowest-quantity shoe.
    ///
    /// Declining leaves both memory and the file untouched. A negative
    /// amount lowers the quantity. An amount that would push the quantity
    /// out of range is refused and asked for again.
    pub fn restock(&mut self) -> Result<(), ControllerError> {
        let index = self.show_lowest()?;

        if !self
            .prompter
            .confirm("\nWould you like to add quantity? (y/n): ")?
        {
            return Ok(());
        }
        loop {
            let amount = self.prompter.integer(
                "How much would you like to add: ",
                "Enter a number value for the restock. Try again...\n",
            )?;
            match self.restock_at(index, amount) {
                Err(ControllerError::QuantityOutOfRange { .. }) => writeln!(
                    self.prompter.output(),
                    "That amount is too large for the current quantity. Try again...\n"
                )?,
                result => break result?,
            }
        }

        let out = self.prompter.output();
        writeln!(out, "\nNew details...")?;
        output::write_table(out, &self.inventory.as_slice()[index..=index])?;
        self.status("Inventory file updated...")?;
        Ok(())
    }

    /// Add `amount` to the shoe at `index` and rewrite the file.
    ///
    /// An out-of-range index changes nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// [`ControllerError::QuantityOutOfRange`] if the new quantity would not
    /// fit in `i64`. Nothing is changed or written in that case.
    pub fn restock_at(&mut self, index: usize, amount: i64) -> Result<(), ControllerError> {
        let Some(shoe) = self.inventory.get_mut(index) else {
            return Ok(());
        };
        let quantity = shoe.quantity();
        if shoe.add_quantity(amount).is_none() {
            return Err(ControllerError::QuantityOutOfRange { quantity, amount });
        }
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::ControllerError;

    #[test]
    fn restocks_only_the_lowest() {
        let (temp, mut controller) = scripted(SAMPLE, "y\n30\n");
        controller.restock().unwrap();

        let quantities: Vec<_> = controller.inventory().iter().map(|s| s.quantity()).collect();
        assert_eq!(quantities, [20, 50, 49]);
        assert_eq!(
            file_text(&temp),
            SAMPLE.replace("Blazer,1700,19", "Blazer,1700,49")
        );

        let out = printed(controller);
        assert!(out.contains("lowest quantity in stock"));
        assert!(out.contains("New details..."));
        assert!(out.contains("Inventory file updated..."));
    }

    #[test]
    fn declining_writes_nothing() {
        let (temp, mut controller) = scripted(SAMPLE, "n\n");
        controller.restock().unwrap();
        assert_eq!(controller.inventory().as_slice()[2].quantity(), 19);
        assert_eq!(file_text(&temp), SAMPLE);
        assert!(!printed(controller).contains("New details..."));
    }

    #[test]
    fn reprompts_for_numbers() {
        let (_temp, mut controller) = scripted(SAMPLE, "sure\ny\nten\n10\n");
        controller.restock().unwrap();
        assert_eq!(controller.inventory().as_slice()[2].quantity(), 29);
        let out = printed(controller);
        assert!(out.contains("Try again..."));
        assert!(out.contains("Enter a number value for the restock"));
    }

    #[test]
    fn first_minimum_wins() {
        let contents = "\
Country,Code,Product,Cost,Quantity
Peru,SKU1,One,10,5
Peru,SKU2,Two,10,2
Peru,SKU3,Three,10,2
";
        let (_temp, mut controller) = scripted(contents, "y\n1\n");
        controller.restock().unwrap();
        let quantities: Vec<_> = controller.inventory().iter().map(|s| s.quantity()).collect();
        assert_eq!(quantities, [5, 3, 2]);
    }

    #[test]
    fn negative_amount_is_applied() {
        let (_temp, mut controller) = scripted(SAMPLE, "y\n-25\n");
        controller.restock().unwrap();
        assert_eq!(controller.inventory().as_slice()[2].quantity(), -6);
    }

    #[test]
    fn empty_inventory_is_an_error() {
        let (temp, mut controller) = scripted("Country,Code,Product,Cost,Quantity\n", "y\n5\n");
        assert!(matches!(
            controller.restock(),
            Err(ControllerError::EmptyInventory)
        ));
        assert_eq!(file_text(&temp), "Country,Code,Product,Cost,Quantity\n");
    }

    #[test]
    fn amount_past_i64_max_is_asked_again() {
        let (temp, mut controller) = scripted(SAMPLE, "y\n9223372036854775807\n5\n");
        controller.restock().unwrap();

        assert_eq!(controller.inventory().as_slice()[2].quantity(), 24);
        assert_eq!(
            file_text(&temp),
            SAMPLE.replace("Blazer,1700,19", "Blazer,1700,24")
        );
        let out = printed(controller);
        assert_eq!(out.matches("too large for the current quantity").count(), 1);
    }

    #[test]
    fn restock_at_out_of_range_amount_changes_nothing() {
        let (temp, mut controller) = scripted(SAMPLE, "");
        let err = controller.restock_at(2, i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::QuantityOutOfRange { quantity: 19, amount: i64::MAX }
        ));
        assert_eq!(controller.inventory().as_slice()[2].quantity(), 19);
        assert_eq!(file_text(&temp), SAMPLE);
    }

    #[test]
    fn restock_at_out_of_range_is_noop() {
        let (temp, mut controller) = scripted(SAMPLE, "");
        controller.restock_at(99, 5).unwrap();
        assert_eq!(file_text(&temp), SAMPLE);
    }
}
