//! Shoestock - a file-backed shoe inventory manager
//!
//! Shoestock keeps a shoe inventory in a flat comma-separated file and
//! drives it from a numbered text menu: view everything, search by code,
//! add new shoes, restock the shoe with the least stock, and report the
//! shoe with the most stock or the value of every line.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the controller)
//! - [`controller`] - Owns the in-memory inventory and runs each operation
//! - [`core`] - Record type, inventory queries, file format, configuration
//! - [`ui`] - Prompts and output formatting
//!
//! # Invariants
//!
//! 1. The controller is the only owner of the in-memory inventory
//! 2. Every mutation is followed by a full rewrite of the inventory file
//! 3. A row that cannot be parsed is dropped, never repaired

pub mod cli;
pub mod controller;
pub mod core;
pub mod ui;
