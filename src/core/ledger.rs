//! Account transaction engine
//!
//! This module implements the [`Ledger`] trait for [`Account`]. It enforces
//! the bank's business rules:
//! - Deposits must be strictly positive
//! - Withdrawals must be strictly positive, within the per-period cap, covered
//!   by the balance and within the per-transaction limit
//! - Every successful operation appends one line to the transaction log
//!
//! Rejected operations never mutate the account.
//!
//! # Withdrawal Guard Order
//!
//! Withdrawal guards are evaluated in a fixed order and the first failing one
//! wins:
//!
//! 1. amount ≤ 0 → `InvalidAmount`
//! 2. withdrawal count already at the cap → `WithdrawalLimitExceeded`
//! 3. balance ≥ amount and amount ≤ limit → success
//! 4. balance < amount → `InsufficientBalance`
//! 5. otherwise → `PerTransactionLimitExceeded`
//!
//! An amount above both the balance and the limit is therefore reported as
//! `InsufficientBalance`.

use crate::core::traits::Ledger;
use crate::types::{format_amount, Account, BankError, DepositReceipt, WithdrawalReceipt};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Width of the statement header and footer
const STATEMENT_WIDTH: usize = 42;

/// Printed instead of log entries when the account has no movements
pub const NO_MOVEMENTS: &str = "No transactions were recorded.";

impl Ledger for Account {
    /// Credit funds to the account
    ///
    /// Increases the balance by `amount` and logs
    /// `"<owner>: Deposit: + <amount>"`. Uses checked arithmetic so the
    /// account is left untouched on overflow.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount to the balance would overflow
    fn deposit(&mut self, amount: Decimal) -> Result<DepositReceipt, BankError> {
        if amount <= Decimal::ZERO {
            warn!(account = self.number, %amount, "deposit rejected: non-positive amount");
            return Err(BankError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.number))?;

        self.balance = new_balance;
        self.log.push(format!(
            "{}: Deposit: + {}",
            self.owner.name(),
            format_amount(amount)
        ));

        debug!(account = self.number, %amount, balance = %self.balance, "deposit applied");

        Ok(DepositReceipt {
            account: self.number,
            amount,
            balance: self.balance,
        })
    }

    /// Debit funds from the account
    ///
    /// On success decreases the balance, increments the withdrawal counter and
    /// logs `"<owner>: Withdrawal: - <amount>"`.
    ///
    /// # Errors
    ///
    /// See the module documentation for the order in which guards apply.
    fn withdraw(&mut self, amount: Decimal) -> Result<WithdrawalReceipt, BankError> {
        if amount <= Decimal::ZERO {
            warn!(account = self.number, %amount, "withdrawal rejected: non-positive amount");
            return Err(BankError::invalid_amount("withdrawal", amount));
        }

        if self.withdrawal_count >= self.policy.max_withdrawals {
            warn!(
                account = self.number,
                count = self.withdrawal_count,
                "withdrawal rejected: period cap reached"
            );
            return Err(BankError::withdrawal_limit_exceeded(
                self.number,
                self.policy.max_withdrawals,
            ));
        }

        if self.balance >= amount && amount <= self.policy.withdrawal_limit {
            let new_balance = self
                .balance
                .checked_sub(amount)
                .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", self.number))?;

            self.balance = new_balance;
            self.withdrawal_count += 1;
            self.log.push(format!(
                "{}: Withdrawal: - {}",
                self.owner.name(),
                format_amount(amount)
            ));

            debug!(
                account = self.number,
                %amount,
                balance = %self.balance,
                count = self.withdrawal_count,
                "withdrawal applied"
            );

            return Ok(WithdrawalReceipt {
                account: self.number,
                amount,
                balance: self.balance,
                remaining_withdrawals: self.remaining_withdrawals(),
            });
        }

        if self.balance < amount {
            warn!(account = self.number, %amount, balance = %self.balance, "withdrawal rejected: insufficient balance");
            Err(BankError::insufficient_balance(
                self.number,
                self.balance,
                amount,
            ))
        } else {
            warn!(account = self.number, %amount, "withdrawal rejected: above per-transaction limit");
            Err(BankError::per_transaction_limit_exceeded(
                self.number,
                self.policy.withdrawal_limit,
                amount,
            ))
        }
    }

    /// Render the account statement
    ///
    /// Header, one line per logged movement in insertion order (or
    /// [`NO_MOVEMENTS`]), the balance line and a footer.
    fn statement(&self) -> String {
        let mut statement = format!("\n{:=^width$}\n", " STATEMENT ", width = STATEMENT_WIDTH);

        if self.log.is_empty() {
            statement.push_str(NO_MOVEMENTS);
            statement.push('\n');
        } else {
            for entry in &self.log {
                statement.push_str(entry);
                statement.push('\n');
            }
        }

        statement.push_str(&format!("\nBalance: {}\n", format_amount(self.balance)));
        statement.push_str(&"=".repeat(STATEMENT_WIDTH));
        statement
    }
}
