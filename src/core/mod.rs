//! core
//!
//! Core domain types, file format, and configuration.
//!
//! # Modules
//!
//! - [`shoe`] - The inventory record
//! - [`inventory`] - Ordered record collection and its scans
//! - [`store`] - Parsing and writing the inventory file
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing here prompts or prints
//! - Malformed input is reported, not repaired

pub mod config;
pub mod inventory;
pub mod shoe;
pub mod store;
