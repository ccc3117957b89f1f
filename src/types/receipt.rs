//! Results of successful ledger operations
//!
//! Receipts carry the figures the operator is shown after a deposit or a
//! withdrawal. Their `Display` output is one message line per figure.

use super::account::AccountNumber;
use super::amount::format_amount;
use rust_decimal::Decimal;
use std::fmt;

/// Outcome of a successful deposit
#[derive(Debug, Clone, PartialEq)]
pub struct DepositReceipt {
    pub account: AccountNumber,
    pub amount: Decimal,
    /// Balance after the deposit
    pub balance: Decimal,
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deposit completed successfully!")
    }
}

/// Outcome of a successful withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalReceipt {
    pub account: AccountNumber,
    pub amount: Decimal,
    /// Balance after the withdrawal
    pub balance: Decimal,
    /// Withdrawals still allowed in the current period
    pub remaining_withdrawals: u32,
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Withdrawal completed successfully!")?;
        writeln!(f, "Account balance: {}", format_amount(self.balance))?;
        write!(f, "Withdrawals remaining: {}", self.remaining_withdrawals)
    }
}
