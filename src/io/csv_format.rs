//! CSV format handling for the account summary export
//!
//! The export writes one row per account, in creation order, with the header
//! `account,agency,holder,national_id,balance,withdrawals`. Balances are
//! written with two fractional digits. The file is a report only; it is never
//! read back.

use crate::core::Bank;
use crate::types::{format_amount, AccountNumber, AccountSummary, BankError};
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One exported CSV row
#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub account: AccountNumber,
    pub agency: &'a str,
    pub holder: &'a str,
    pub national_id: &'a str,
    pub balance: String,
    pub withdrawals: u32,
}

impl<'a> From<&'a AccountSummary> for AccountRow<'a> {
    fn from(summary: &'a AccountSummary) -> Self {
        AccountRow {
            account: summary.number,
            agency: summary.agency,
            holder: &summary.holder,
            national_id: &summary.national_id,
            balance: format_amount(summary.balance),
            withdrawals: summary.withdrawals,
        }
    }
}

/// Write account summaries as CSV to any writer
///
/// The header is written even when there are no accounts.
///
/// # Errors
///
/// Returns `BankError::Export` if a row cannot be serialized or written, or
/// `BankError::Io` if the writer cannot be flushed.
pub fn write_accounts_csv(
    summaries: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = Writer::from_writer(output);

    if summaries.is_empty() {
        writer.write_record([
            "account",
            "agency",
            "holder",
            "national_id",
            "balance",
            "withdrawals",
        ])?;
    }

    for summary in summaries {
        writer.serialize(AccountRow::from(summary))?;
    }

    writer.flush()?;
    Ok(())
}

/// Export every account of `bank` to the CSV file at `path`
///
/// The file is created or truncated.
///
/// # Returns
///
/// The number of exported accounts
pub fn export_accounts(bank: &Bank, path: &Path) -> Result<usize, BankError> {
    let summaries = bank.list_accounts().into_summaries();
    let mut file = File::create(path).map_err(|e| BankError::Io {
        message: format!("cannot create {}: {}", path.display(), e),
    })?;

    write_accounts_csv(&summaries, &mut file)?;

    info!(path = %path.display(), accounts = summaries.len(), "accounts exported");
    Ok(summaries.len())
}
