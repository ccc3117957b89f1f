//! Bank Simulation Library
//! # Overview
//!
//! This library provides a minimal in-memory banking simulation driven by a
//! text menu: register users, open accounts, deposit, withdraw, print
//! statements and list accounts. All state lives for the lifetime of the
//! process.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Identity, Account, AccountPolicy, BankError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Deposit, withdrawal and statement rules
//!   - [`core::bank`] - Identity and account registry
//! - [`shell`] - Interactive menu over any input and output stream
//! - [`io`] - CSV account summary export
//! - [`logging`] - Tracing subscriber setup
//!
//! # Withdrawal Rules
//!
//! Each account allows at most 3 withdrawals of at most 500.00 each, and the
//! balance can never go negative. Both limits are configurable through
//! [`AccountPolicy`].

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod shell;
pub mod types;

pub use core::{Bank, Ledger};
pub use io::{export_accounts, write_accounts_csv};
pub use shell::Session;
pub use types::{
    Account, AccountListing, AccountNumber, AccountPolicy, AccountSummary, BankError,
    DepositReceipt, Identity, NationalId, WithdrawalReceipt,
};
