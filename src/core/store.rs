//! core::store
//!
//! Flat-file persistence for the inventory.
//!
//! # Format
//!
//! The inventory file is comma-separated text. The first line is a header
//! and only fixes the expected number of columns; its names are not
//! interpreted. Every following line is one record:
//!
//! ```text
//! Country,Code,Product,Cost,Quantity
//! South Africa,SKU44386,Air Max 90,2300,20
//! China,SKU90000,Jordan 1,3200,50
//! ```
//!
//! There is no quoting. A comma inside a field shifts the columns and the
//! row is rejected on the next load.
//!
//! # Malformed rows
//!
//! A row is skipped when its column count differs from the header's or
//! when cost or quantity is not an integer. Loading never fails because of
//! a bad row; the number of skipped rows is reported in [`LoadReport`] so
//! the caller can warn once.
//!
//! # Writes
//!
//! [`InventoryStore::persist`] always rewrites the whole file, writing to a
//! sibling temp file first and renaming it over the target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::inventory::Inventory;
use super::shoe::Shoe;

/// Header line written at the top of every persisted file.
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Errors from reading or writing the inventory file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The inventory file does not exist.
    #[error("{} not found, please fix and run this program again", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read inventory file '{}': {source}", .path.display())]
    ReadError { path: PathBuf, source: io::Error },

    #[error("failed to write inventory file '{}': {source}", .path.display())]
    WriteError { path: PathBuf, source: io::Error },
}

/// Outcome of loading the inventory file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records that parsed cleanly, in file order.
    pub inventory: Inventory,
    /// Number of data rows that were dropped.
    pub skipped_rows: usize,
}

impl LoadReport {
    /// True if at least one data row was dropped.
    pub fn has_formatting_errors(&self) -> bool {
        self.skipped_rows > 0
    }
}

/// The inventory file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the inventory file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the file does not exist
    /// - [`StoreError::ReadError`] for any other I/O failure
    pub fn load(&self) -> Result<LoadReport, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let report = parse(&contents);
        debug!(
            path = %self.path.display(),
            records = report.inventory.len(),
            skipped = report.skipped_rows,
            "loaded inventory"
        );
        Ok(report)
    }

    /// Overwrite the inventory file with `inventory`.
    pub fn persist(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let contents = render(inventory);
        write_atomic(&self.path, contents.as_bytes()).map_err(|source| {
            StoreError::WriteError {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(
            path = %self.path.display(),
            records = inventory.len(),
            "persisted inventory"
        );
        Ok(())
    }
}

/// Replace `path` with `contents` in one step.
///
/// The bytes go to `<path>.tmp` beside the target, are synced, then renamed
/// over it, so readers see either the old file or the new one. The temp
/// file is removed if any step fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    let result = written.and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Parse the full text of an inventory file.
///
/// An empty input yields an empty inventory with nothing skipped.
pub fn parse(contents: &str) -> LoadReport {
    let mut lines = contents.lines();
    let Some(header) = lines.next() else {
        return LoadReport::default();
    };
    let columns = header.split(',').count();

    let mut report = LoadReport::default();
    for line in lines {
        match parse_row(line, columns) {
            Some(shoe) => report.inventory.push(shoe),
            None => {
                debug!(row = line, "skipping malformed inventory row");
                report.skipped_rows += 1;
            }
        }
    }
    report
}

/// Parse one data row, or `None` if it is malformed.
fn parse_row(line: &str, columns: usize) -> Option<Shoe> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != columns {
        return None;
    }
    let [country, code, product, cost, quantity, ..] = fields.as_slice() else {
        return None;
    };
    let cost = cost.trim().parse().ok()?;
    let quantity = quantity.trim().parse().ok()?;
    Some(Shoe::new(*country, *code, *product, cost, quantity))
}

/// Serialize an inventory to file text, header included.
pub fn render(inventory: &Inventory) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + inventory.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for shoe in inventory {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            shoe.country(),
            shoe.code(),
            shoe.product(),
            shoe.cost(),
            shoe.quantity()
        ));
    }
    out
}
