//! Identity and account registry
//!
//! This module provides the `Bank` struct which owns every identity and
//! account of the simulation.
//!
//! The Bank is responsible for:
//! - Registering identities, unique by national ID
//! - Opening accounts for registered identities with sequential numbers
//! - Looking up identities and accounts
//! - Providing account listings in creation order

use crate::types::{
    Account, AccountListing, AccountNumber, AccountPolicy, BankError, Identity, NationalId,
};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use tracing::{debug, warn};

/// First account number handed out by a new bank
const FIRST_ACCOUNT_NUMBER: AccountNumber = 1;

/// Registry of identities and accounts
///
/// Accounts are keyed by their number in an ordered map; since numbers are
/// assigned monotonically, iteration order is creation order. Identities are
/// kept in registration order with a map from national ID to position.
pub struct Bank {
    identities: Vec<Rc<Identity>>,
    identity_index: HashMap<NationalId, usize>,
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
    policy: AccountPolicy,
}

impl Bank {
    /// Create an empty bank using the default account policy
    pub fn new() -> Self {
        Self::with_policy(AccountPolicy::default())
    }

    /// Create an empty bank whose accounts are opened with `policy`
    pub fn with_policy(policy: AccountPolicy) -> Self {
        Bank {
            identities: Vec::new(),
            identity_index: HashMap::new(),
            accounts: BTreeMap::new(),
            next_account_number: FIRST_ACCOUNT_NUMBER,
            policy,
        }
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    /// Register a new identity
    ///
    /// # Returns
    ///
    /// A reference to the stored identity
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateIdentity` if an identity with the same
    /// national ID is already registered. Nothing is stored in that case.
    pub fn create_identity(
        &mut self,
        name: &str,
        birth_date: &str,
        national_id: &str,
        address: &str,
    ) -> Result<&Identity, BankError> {
        if self.identity_index.contains_key(national_id) {
            warn!(national_id, "identity rejected: national ID already registered");
            return Err(BankError::duplicate_identity(national_id));
        }

        let identity = Rc::new(Identity::new(name, birth_date, national_id, address));
        let position = self.identities.len();
        self.identities.push(identity);
        self.identity_index.insert(national_id.to_string(), position);

        debug!(national_id, "identity registered");
        Ok(&self.identities[position])
    }

    /// Open a new account for a registered identity
    ///
    /// The account receives the next sequential number and the bank's policy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No identity is registered with `national_id`
    /// - The account number counter is exhausted
    pub fn create_account(&mut self, national_id: &str) -> Result<&Account, BankError> {
        let owner = match self.identity_index.get(national_id) {
            Some(&position) => Rc::clone(&self.identities[position]),
            None => {
                warn!(national_id, "account rejected: unknown national ID");
                return Err(BankError::identity_not_found(national_id));
            }
        };

        let number = self.next_account_number;
        self.next_account_number = number
            .checked_add(1)
            .ok_or_else(|| BankError::arithmetic_overflow("account numbering", number))?;

        let policy = self.policy;
        debug!(account = number, national_id, "account opened");
        Ok(self
            .accounts
            .entry(number)
            .or_insert_with(|| Account::new(number, owner, policy)))
    }

    /// Find an identity by national ID
    pub fn find_identity(&self, national_id: &str) -> Option<&Identity> {
        self.identity_index
            .get(national_id)
            .map(|&position| self.identities[position].as_ref())
    }

    /// Find an account by number
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Get a mutable account by number, for deposits and withdrawals
    ///
    /// # Errors
    ///
    /// Returns `BankError::AccountNotFound` if no account has this number.
    pub fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// All identities, in registration order
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter().map(|identity| identity.as_ref())
    }

    /// Summaries of every account, in creation order
    pub fn list_accounts(&self) -> AccountListing {
        AccountListing::new(self.accounts.values().map(Account::summary).collect())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ledger;
    use rust_decimal::Decimal;

    fn bank_with_identity() -> Bank {
        let mut bank = Bank::new();
        bank.create_identity("Ana", "01/02/1990", "123", "Rua A")
            .unwrap();
        bank
    }

    #[test]
    fn test_new_creates_empty_bank() {
        let bank = Bank::new();
        assert_eq!(bank.accounts().count(), 0);
        assert_eq!(bank.identities().count(), 0);
        assert!(bank.list_accounts().is_empty());
        assert_eq!(bank.policy(), AccountPolicy::default());
    }

    #[test]
    fn test_create_identity_stores_identity() {
        let bank = bank_with_identity();

        let identity = bank.find_identity("123").unwrap();
        assert_eq!(identity.name(), "Ana");
        assert_eq!(identity.address(), "Rua A");
    }

    #[test]
    fn test_create_identity_rejects_duplicate_national_id() {
        let mut bank = bank_with_identity();

        let result = bank.create_identity("Other", "02/03/1991", "123", "Rua B");

        assert_eq!(result.unwrap_err(), BankError::duplicate_identity("123"));
        assert_eq!(bank.identities().count(), 1);
        assert_eq!(bank.find_identity("123").unwrap().name(), "Ana");
    }

    #[test]
    fn test_find_identity_returns_none_for_unknown() {
        let bank = bank_with_identity();
        assert!(bank.find_identity("999").is_none());
    }

    #[test]
    fn test_create_account_requires_identity() {
        let mut bank = Bank::new();

        let result = bank.create_account("123");

        assert_eq!(result.unwrap_err(), BankError::identity_not_found("123"));
        assert_eq!(bank.accounts().count(), 0);
    }

    #[test]
    fn test_account_numbers_are_sequential_from_one() {
        let mut bank = bank_with_identity();
        bank.create_identity("Bia", "03/04/1992", "456", "Rua C")
            .unwrap();

        let numbers: Vec<AccountNumber> = ["123", "456", "123", "456", "123"]
            .iter()
            .map(|id| bank.create_account(id).unwrap().number())
            .collect();

        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failed_account_creation_does_not_consume_a_number() {
        let mut bank = bank_with_identity();

        bank.create_account("123").unwrap();
        bank.create_account("missing").unwrap_err();
        let second = bank.create_account("123").unwrap().number();

        assert_eq!(second, 2);
    }

    #[test]
    fn test_identity_may_own_several_accounts() {
        let mut bank = bank_with_identity();
        bank.create_account("123").unwrap();
        bank.create_account("123").unwrap();

        let owners: Vec<&str> = bank
            .accounts()
            .map(|account| account.owner().national_id())
            .collect();
        assert_eq!(owners, vec!["123", "123"]);
    }

    #[test]
    fn test_account_mut_reports_unknown_account() {
        let mut bank = bank_with_identity();

        let result = bank.account_mut(3);

        assert_eq!(result.unwrap_err(), BankError::account_not_found(3));
    }

    #[test]
    fn test_account_mut_changes_are_visible_through_find_account() {
        let mut bank = bank_with_identity();
        bank.create_account("123").unwrap();

        bank.account_mut(1)
            .unwrap()
            .deposit(Decimal::new(250, 0))
            .unwrap();

        assert_eq!(bank.find_account(1).unwrap().balance(), Decimal::new(250, 0));
        assert!(bank.find_account(2).is_none());
    }

    #[test]
    fn test_accounts_use_bank_policy() {
        let mut bank = Bank::with_policy(AccountPolicy::new(Decimal::new(100, 0), 1));
        bank.create_identity("Ana", "", "123", "").unwrap();

        let account = bank.create_account("123").unwrap();

        assert_eq!(account.withdrawal_limit(), Decimal::new(100, 0));
        assert_eq!(account.max_withdrawals(), 1);
    }

    #[test]
    fn test_list_accounts_in_creation_order() {
        let mut bank = bank_with_identity();
        bank.create_identity("Bia", "03/04/1992", "456", "Rua C")
            .unwrap();
        bank.create_account("456").unwrap();
        bank.create_account("123").unwrap();

        let listing = bank.list_accounts();
        let holders: Vec<&str> = listing.iter().map(|s| s.holder.as_str()).collect();

        assert_eq!(listing.len(), 2);
        assert_eq!(holders, vec!["Bia", "Ana"]);
    }

    #[test]
    fn test_identities_in_registration_order() {
        let mut bank = Bank::new();
        for id in ["3", "1", "2"] {
            bank.create_identity("x", "", id, "").unwrap();
        }

        let ids: Vec<&str> = bank.identities().map(Identity::national_id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
