//! Account-related types for the banking simulation
//!
//! This module defines the Account structure and the read-only summaries used
//! for listings and exports. Balance-changing operations live in
//! [`crate::core::ledger`].

use super::amount::format_amount;
use super::identity::Identity;
use super::policy::AccountPolicy;
use rust_decimal::Decimal;
use std::fmt;
use std::rc::Rc;

/// Account number
///
/// Assigned sequentially by the bank, starting at 1.
pub type AccountNumber = u32;

/// Branch code shared by every account
pub const AGENCY_CODE: &str = "0001";

/// Width of the separator printed between listed accounts
const LISTING_RULE_WIDTH: usize = 80;

/// Client account state
///
/// Holds the balance, the append-only transaction log and the withdrawal
/// counter. The owner is shared with the bank's identity registry.
#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) number: AccountNumber,
    pub(crate) owner: Rc<Identity>,

    /// Current balance, never negative
    pub(crate) balance: Decimal,

    /// One formatted line per successful deposit or withdrawal, in order
    pub(crate) log: Vec<String>,

    /// Successful withdrawals so far, never above `policy.max_withdrawals`
    pub(crate) withdrawal_count: u32,

    pub(crate) policy: AccountPolicy,
}

impl Account {
    /// Create a new account with zero balance and an empty log
    ///
    /// # Arguments
    ///
    /// * `number` - The account number assigned by the bank
    /// * `owner` - The identity owning this account
    /// * `policy` - Withdrawal rules for this account
    pub fn new(number: AccountNumber, owner: Rc<Identity>, policy: AccountPolicy) -> Self {
        Account {
            number,
            owner,
            balance: Decimal::ZERO,
            log: Vec::new(),
            withdrawal_count: 0,
            policy,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn agency(&self) -> &'static str {
        AGENCY_CODE
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transaction_log(&self) -> &[String] {
        &self.log
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    pub fn withdrawal_limit(&self) -> Decimal {
        self.policy.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.policy.max_withdrawals
    }

    /// Withdrawals still allowed in the current period
    pub fn remaining_withdrawals(&self) -> u32 {
        self.policy.max_withdrawals.saturating_sub(self.withdrawal_count)
    }

    /// Snapshot of the account for listings and exports
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            number: self.number,
            agency: AGENCY_CODE,
            holder: self.owner.name().to_string(),
            national_id: self.owner.national_id().to_string(),
            balance: self.balance,
            withdrawals: self.withdrawal_count,
        }
    }
}

/// Read-only view of an account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub agency: &'static str,
    pub holder: String,
    pub national_id: String,
    pub balance: Decimal,
    pub withdrawals: u32,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account No. {}, Agency: {}, User: {}, national ID: {}",
            self.number, self.agency, self.holder, self.national_id
        )
    }
}

/// Accounts in creation order, rendered as the "list accounts" report
#[derive(Debug, Clone, PartialEq)]
pub struct AccountListing {
    summaries: Vec<AccountSummary>,
}

impl AccountListing {
    pub fn new(summaries: Vec<AccountSummary>) -> Self {
        AccountListing { summaries }
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccountSummary> {
        self.summaries.iter()
    }

    pub fn into_summaries(self) -> Vec<AccountSummary> {
        self.summaries
    }
}

impl fmt::Display for AccountListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summaries.is_empty() {
            return write!(f, "No accounts registered.");
        }

        let rule = "=".repeat(LISTING_RULE_WIDTH);
        for summary in &self.summaries {
            writeln!(f, "{}", rule)?;
            writeln!(f, "{}", summary)?;
        }
        write!(f, "{}", rule)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (balance {})",
            self.summary(),
            format_amount(self.balance)
        )
    }
}
