//! Core traits for ledger operations
//!
//! This module defines the capability set every account kind must provide.
//! The bank only ever creates one kind of account, but the shell and tests
//! drive it through this trait.

use crate::types::{BankError, DepositReceipt, WithdrawalReceipt};
use rust_decimal::Decimal;

/// Trait for balance-changing operations on an account
pub trait Ledger {
    /// Credit funds to the account
    fn deposit(&mut self, amount: Decimal) -> Result<DepositReceipt, BankError>;

    /// Debit funds from the account, subject to the account's withdrawal rules
    fn withdraw(&mut self, amount: Decimal) -> Result<WithdrawalReceipt, BankError>;

    /// Render the account statement
    fn statement(&self) -> String;
}
