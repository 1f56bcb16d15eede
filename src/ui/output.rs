//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results (tables, search hits) are always shown. Status chatter such as
//! "Inventory file updated..." respects the quiet flag.

use std::fmt::Display;
use std::io::{self, Write};

use crate::core::shoe::{group_thousands, Shoe};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet mode - results only
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Column header row matching [`Shoe`]'s table row layout.
pub fn table_header() -> String {
    format!(
        "| {:<20} | {:<9} | {:<25} | {:<6} | {:<4} | {:<9} |",
        "Country", "Code", "Product Name", "Cost", "Qty", "Value"
    )
}

/// Write a full table: top rule, header, rule, rows, closing rule.
pub fn write_table<'a, W, I>(out: &mut W, shoes: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Shoe>,
{
    let header = table_header();
    let width = header.chars().count();
    writeln!(out, "{}", "_".repeat(width))?;
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(width))?;
    for shoe in shoes {
        writeln!(out, "{}", shoe)?;
    }
    writeln!(out, "{}", "-".repeat(width))
}

/// Write the total stock value line that closes the value report.
///
/// `None` is a total too large to represent.
pub fn write_total<W: Write>(out: &mut W, total: Option<i128>) -> io::Result<()> {
    match total {
        Some(total) => writeln!(out, "Total stock value: {}", group_thousands(total)),
        None => writeln!(out, "Total stock value: out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert!(Verbosity::Quiet.is_quiet());
    }

    #[test]
    fn header_matches_row_width() {
        let row = Shoe::new("Vietnam", "SKU1", "Blazer", 1, 1).to_string();
        assert_eq!(table_header().len(), row.len());
    }

    #[test]
    fn table_layout() {
        let shoes = [
            Shoe::new("Vietnam", "SKU1", "Blazer", 1700, 19),
            Shoe::new("China", "SKU2", "Jordan 1", 3200, 50),
        ];
        let mut out = Vec::new();
        write_table(&mut out, &shoes).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].chars().all(|c| c == '_'));
        assert!(lines[1].starts_with("| Country "));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].contains("Blazer"));
        assert!(lines[4].contains("Jordan 1"));
        assert!(lines[4].contains("160,000"));
        assert_eq!(lines[5], lines[2]);
    }

    #[test]
    fn empty_table_still_has_frame() {
        let mut out = Vec::new();
        write_table(&mut out, &Vec::<Shoe>::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }

    #[test]
    fn total_line() {
        let mut out = Vec::new();
        write_total(&mut out, Some(1_234_500)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total stock value: 1,234,500\n");
    }

    #[test]
    fn total_out_of_range() {
        let mut out = Vec::new();
        write_total(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total stock value: out of range\n");
    }
}
