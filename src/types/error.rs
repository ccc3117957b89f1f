//! Error types for the banking simulation
//!
//! Every error is recoverable from the point of view of the menu: the shell
//! prints the message and returns to the menu. Only I/O failures on the
//! session streams end the program.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: invalid amounts, withdrawal cap, insufficient balance,
//!   per-transaction limit
//! - **Registry Errors**: duplicate or unknown identities, unknown accounts
//! - **Input Errors**: menu answers that cannot be parsed
//! - **I/O Errors**: session streams and CSV export

use super::account::AccountNumber;
use super::amount::format_amount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Deposit or withdrawal amount is zero or negative
    #[error("Invalid {operation} value: the amount must be greater than zero")]
    InvalidAmount {
        /// Operation that was rejected ("deposit" or "withdrawal")
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// The account already used every withdrawal of the period
    #[error("Withdrawal limit exceeded: account {account} already made {max_withdrawals} withdrawals")]
    WithdrawalLimitExceeded {
        account: AccountNumber,
        max_withdrawals: u32,
    },

    /// Balance is lower than the requested withdrawal
    #[error(
        "Insufficient balance in account {account}: balance {}, requested {}",
        format_amount(*balance),
        format_amount(*requested)
    )]
    InsufficientBalance {
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    },

    /// Balance covers the withdrawal but the amount exceeds the per-transaction ceiling
    #[error(
        "Withdrawal of {} exceeds the per-transaction limit of {}",
        format_amount(*requested),
        format_amount(*limit)
    )]
    PerTransactionLimitExceeded {
        account: AccountNumber,
        limit: Decimal,
        requested: Decimal,
    },

    /// An identity with this national ID is already registered
    #[error("A user is already registered with national ID {national_id}")]
    DuplicateIdentity { national_id: String },

    /// No identity is registered with this national ID
    #[error("No user found with national ID {national_id}")]
    IdentityNotFound { national_id: String },

    /// No account exists with this number
    #[error("Account {account} not found")]
    AccountNotFound { account: AccountNumber },

    /// Operator input could not be parsed
    #[error("Malformed {field}: '{value}'")]
    MalformedInput {
        /// What was being read (e.g. "amount", "account number")
        field: String,
        /// The raw text that was typed
        value: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and the account is left untouched.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        operation: String,
        account: AccountNumber,
    },

    /// I/O error on the session streams or an export file
    #[error("I/O error: {message}")]
    Io { message: String },

    /// CSV export failed
    #[error("Export error: {message}")]
    Export { message: String },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::Export {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Whether the error must end the session instead of being shown to the operator
    pub fn is_fatal(&self) -> bool {
        matches!(self, BankError::Io { .. })
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create a WithdrawalLimitExceeded error
    pub fn withdrawal_limit_exceeded(account: AccountNumber, max_withdrawals: u32) -> Self {
        BankError::WithdrawalLimitExceeded {
            account,
            max_withdrawals,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create a PerTransactionLimitExceeded error
    pub fn per_transaction_limit_exceeded(
        account: AccountNumber,
        limit: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::PerTransactionLimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a DuplicateIdentity error
    pub fn duplicate_identity(national_id: &str) -> Self {
        BankError::DuplicateIdentity {
            national_id: national_id.to_string(),
        }
    }

    /// Create an IdentityNotFound error
    pub fn identity_not_found(national_id: &str) -> Self {
        BankError::IdentityNotFound {
            national_id: national_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(field: &str, value: &str) -> Self {
        BankError::MalformedInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}
