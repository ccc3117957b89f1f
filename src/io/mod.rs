//! I/O module
//!
//! Handles the CSV account summary export.
//!
//! # Components
//!
//! - `csv_format` - CSV row layout and writers

pub mod csv_format;

pub use csv_format::{export_accounts, write_accounts_csv, AccountRow};
