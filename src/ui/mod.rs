//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive prompts and confirmations
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All console text goes through this module so prompts, tables and
//! messages look the same from every command.

pub mod output;
pub mod prompts;
