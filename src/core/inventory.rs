//! core::inventory
//!
//! The in-memory inventory and its linear-scan queries.
//!
//! # Ordering
//!
//! Records keep file order, followed by append order for records added
//! during the session. Every query below is a plain scan over that order,
//! so tie-breaking is defined by position:
//!
//! - [`Inventory::lowest_quantity`] returns the *first* minimum
//! - [`Inventory::highest_quantity`] returns the *first* maximum
//! - [`Inventory::find_by_code`] returns the *last* record with the code

use super::shoe::Shoe;

/// Ordered collection of shoes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Append a shoe to the end of the inventory.
    pub fn push(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shoe> {
        self.shoes.iter()
    }

    pub fn as_slice(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn last(&self) -> Option<&Shoe> {
        self.shoes.last()
    }

    /// Look up a shoe by its full code.
    ///
    /// Codes are not unique. When several shoes share a code, the one
    /// appearing last wins.
    pub fn find_by_code(&self, code: &str) -> Option<&Shoe> {
        self.shoes.iter().rev().find(|shoe| shoe.code() == code)
    }

    /// Index of the shoe with the smallest quantity (first one on ties).
    pub fn lowest_quantity_index(&self) -> Option<usize> {
        self.position_by(|candidate, best| candidate < best)
    }

    /// Index of the shoe with the largest quantity (first one on ties).
    pub fn highest_quantity_index(&self) -> Option<usize> {
        self.position_by(|candidate, best| candidate > best)
    }

    pub fn lowest_quantity(&self) -> Option<&Shoe> {
        self.lowest_quantity_index().map(|i| &self.shoes[i])
    }

    pub fn highest_quantity(&self) -> Option<&Shoe> {
        self.highest_quantity_index().map(|i| &self.shoes[i])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shoe> {
        self.shoes.get_mut(index)
    }

    /// Sum of every shoe's stock value, or `None` if it leaves `i128`.
    pub fn total_value(&self) -> Option<i128> {
        self.shoes
            .iter()
            .try_fold(0i128, |total, shoe| total.checked_add(shoe.value()))
    }

    /// Scan quantities, replacing the current best only when `better`
    /// holds strictly, so the earliest record wins ties.
    fn position_by(&self, better: impl Fn(i64, i64) -> bool) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (i, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, q)) if !better(shoe.quantity(), q) => {}
                _ => best = Some((i, shoe.quantity())),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl FromIterator<Shoe> for Inventory {
    fn from_iter<I: IntoIterator<Item = Shoe>>(iter: I) -> Self {
        Self {
            shoes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Shoe;
    type IntoIter = std::slice::Iter<'a, Shoe>;

    fn into_iter(self) -> Self::IntoIter {
        self.shoes.iter()
    }
}
