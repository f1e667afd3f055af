//! # unlog
//!
//! Removes `console.log(...)` statements from JavaScript and TypeScript files.
//!
//! The heart of the crate is the [statement scanner](unlog::scanning), a small character
//! level state machine that finds where a `console.log(` statement ends while skipping
//! over string literals, template literals and their `${...}` slots. Everything else
//! (the file pipeline, configuration, reporting) is thin glue around it.

pub mod unlog;

pub use unlog::scanning::{clean, clean_with, ScanOptions};
