//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `identity`: Customer identity records
//! - `account`: Account state, summaries and listings
//! - `policy`: Withdrawal rules applied to accounts
//! - `receipt`: Results of successful deposits and withdrawals
//! - `amount`: Decimal formatting and parsing
//! - `error`: Error types for the banking simulation

pub mod account;
pub mod amount;
pub mod error;
pub mod identity;
pub mod policy;
pub mod receipt;

pub use account::{Account, AccountListing, AccountNumber, AccountSummary, AGENCY_CODE};
pub use amount::{format_amount, parse_amount};
pub use error::BankError;
pub use identity::{Identity, NationalId};
pub use policy::AccountPolicy;
pub use receipt::{DepositReceipt, WithdrawalReceipt};
