//! core::shoe
//!
//! The inventory record type.
//!
//! # Overview
//!
//! A [`Shoe`] is one line of the inventory file: where the stock is held,
//! its SKU code, the product name, unit cost and quantity on hand. The
//! stock value is derived on demand and never stored.
//!
//! # Example
//!
//! ```
//! use shoestock::core::shoe::Shoe;
//!
//! let mut shoe = Shoe::new("South Africa", "SKU44386", "Air Max 90", 2300, 20);
//! assert_eq!(shoe.value(), 46_000);
//!
//! shoe.add_quantity(5).unwrap();
//! assert_eq!(shoe.quantity(), 25);
//! ```

use std::fmt;

/// Default literal that every shoe code starts with.
pub const DEFAULT_CODE_PREFIX: &str = "SKU";

/// One shoe product held at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    country: String,
    code: String,
    product: String,
    cost: i64,
    quantity: i64,
}

impl Shoe {
    /// Create a shoe from its five fields.
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: i64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock value of this line: `cost * quantity`.
    ///
    /// Computed in `i128`, which holds the product of any two `i64`s.
    pub fn value(&self) -> i128 {
        i128::from(self.cost) * i128::from(self.quantity)
    }

    /// Add `amount` to the quantity on hand, returning the new quantity.
    ///
    /// A negative amount can take the quantity below zero. Returns `None`
    /// and leaves the quantity unchanged if the sum does not fit in `i64`.
    #[must_use = "None means the quantity was not changed"]
    pub fn add_quantity(&mut self, amount: i64) -> Option<i64> {
        let quantity = self.quantity.checked_add(amount)?;
        self.quantity = quantity;
        Some(quantity)
    }
}

/// Renders the shoe as one row of the inventory table.
impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {:<20} | {:<9} | {:<25} | {:>6} | {:>4} | {:>9} |",
            self.country,
            self.code,
            self.product,
            self.cost,
            self.quantity,
            group_thousands(self.value())
        )
    }
}

/// Join a code suffix onto the configured prefix.
///
/// # Example
///
/// ```
/// use shoestock::core::shoe::prefixed_code;
///
/// assert_eq!(prefixed_code("SKU", "44386"), "SKU44386");
/// ```
pub fn prefixed_code(prefix: &str, suffix: &str) -> String {
    format!("{}{}", prefix, suffix)
}

/// Format an integer with `,` between groups of three digits.
///
/// # Example
///
/// ```
/// use shoestock::core::shoe::group_thousands;
///
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// assert_eq!(group_thousands(-4500), "-4,500");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(n: impl Into<i128>) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Shoe {
        Shoe::new("Vietnam", "SKU90000", "Jordan 1", 25, 10)
    }

    #[test]
    fn accessors_return_fields() {
        let shoe = sample();
        assert_eq!(shoe.country(), "Vietnam");
        assert_eq!(shoe.code(), "SKU90000");
        assert_eq!(shoe.product(), "Jordan 1");
        assert_eq!(shoe.cost(), 25);
        assert_eq!(shoe.quantity(), 10);
    }

    mod value {
        use super::*;

        #[test]
        fn cost_times_quantity() {
            assert_eq!(sample().value(), 250);
        }

        #[test]
        fn zero_cost_or_quantity() {
            assert_eq!(Shoe::new("a", "b", "c", 0, 10).value(), 0);
            assert_eq!(Shoe::new("a", "b", "c", 25, 0).value(), 0);
        }

        #[test]
        fn tracks_quantity_changes() {
            let mut shoe = sample();
            shoe.add_quantity(2).unwrap();
            assert_eq!(shoe.value(), 300);
        }

        #[test]
        fn does_not_overflow_at_i64_max() {
            let shoe = Shoe::new("Peru", "SKU1", "Big", i64::MAX, 2);
            assert_eq!(shoe.value(), i128::from(i64::MAX) * 2);
            assert_eq!(
                group_thousands(shoe.value()),
                "18,446,744,073,709,551,614"
            );
        }

        #[test]
        fn extreme_negatives() {
            let shoe = Shoe::new("Peru", "SKU1", "Big", i64::MIN, i64::MIN);
            assert_eq!(shoe.value(), i128::from(i64::MIN) * i128::from(i64::MIN));
        }
    }

    mod add_quantity {
        use super::*;

        #[test]
        fn increments() {
            let mut shoe = sample();
            assert_eq!(shoe.add_quantity(15), Some(25));
            assert_eq!(shoe.quantity(), 25);
        }

        #[test]
        fn negative_amount_can_go_below_zero() {
            let mut shoe = sample();
            assert_eq!(shoe.add_quantity(-12), Some(-2));
            assert_eq!(shoe.quantity(), -2);
        }

        #[test]
        fn overflow_leaves_quantity_unchanged() {
            let mut shoe = sample();
            assert_eq!(shoe.add_quantity(i64::MAX), None);
            assert_eq!(shoe.quantity(), 10);

            let mut low = Shoe::new("a", "b", "c", 1, -10);
            assert_eq!(low.add_quantity(i64::MIN), None);
            assert_eq!(low.quantity(), -10);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn renders_table_row() {
            let row = Shoe::new("Pakistan", "SKU44600", "Air Force 1", 1200, 15).to_string();
            assert_eq!(
                row,
                "| Pakistan             | SKU44600  | Air Force 1               |   1200 |   15 |    18,000 |"
            );
        }

        #[test]
        fn long_fields_are_not_truncated() {
            let row = Shoe::new("a", "b", "an extremely long product name here", 1, 1).to_string();
            assert!(row.contains("an extremely long product name here"));
        }
    }

    mod thousands {
        use super::*;

        #[test]
        fn small_numbers_unchanged() {
            assert_eq!(group_thousands(0), "0");
            assert_eq!(group_thousands(7), "7");
            assert_eq!(group_thousands(100), "100");
        }

        #[test]
        fn exact_groups() {
            assert_eq!(group_thousands(1000), "1,000");
            assert_eq!(group_thousands(100000), "100,000");
            assert_eq!(group_thousands(1000000), "1,000,000");
        }

        #[test]
        fn negative() {
            assert_eq!(group_thousands(-1000), "-1,000");
            assert_eq!(group_thousands(-12), "-12");
            assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
        }
    }

    #[test]
    fn prefix_is_joined() {
        assert_eq!(prefixed_code(DEFAULT_CODE_PREFIX, "123"), "SKU123");
        assert_eq!(prefixed_code("SKU", ""), "SKU");
    }
}
