//! Core business logic module
//!
//! This module contains the core banking components:
//! - `traits` - The `Ledger` capability set implemented by accounts
//! - `ledger` - Deposit, withdrawal and statement rules for accounts
//! - `bank` - Identity and account registry

pub mod bank;
pub mod ledger;
pub mod traits;

pub use bank::Bank;
pub use traits::Ledger;
