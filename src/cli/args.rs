use crate::types::AccountPolicy;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Menu-driven in-memory banking simulation
#[derive(Parser, Debug)]
#[command(name = "bank-sim")]
#[command(about = "Menu-driven in-memory banking simulation", long_about = None)]
pub struct CliArgs {
    /// Read menu answers from a file instead of standard input
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "Text file with one menu answer per line, replayed instead of stdin"
    )]
    pub script: Option<PathBuf>,

    /// Write an account summary CSV when the session ends
    #[arg(
        long = "export",
        value_name = "FILE",
        help = "Write a CSV summary of every account to FILE when the session ends"
    )]
    pub export: Option<PathBuf>,

    /// Maximum amount of a single withdrawal
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        help = "Maximum amount of a single withdrawal (default: 500.00)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Maximum number of withdrawals per account
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        help = "Maximum number of withdrawals per account (default: 3)"
    )]
    pub max_withdrawals: Option<u32>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Log every ledger operation to stderr")]
    pub verbose: bool,
}

impl CliArgs {
    /// Create an AccountPolicy from CLI arguments
    ///
    /// Values not given on the command line keep their defaults. Invalid
    /// values are replaced by defaults inside `AccountPolicy::new`, which logs
    /// a warning.
    pub fn to_policy(&self) -> AccountPolicy {
        if self.withdrawal_limit.is_some() || self.max_withdrawals.is_some() {
            let default = AccountPolicy::default();
            AccountPolicy::new(
                self.withdrawal_limit.unwrap_or(default.withdrawal_limit),
                self.max_withdrawals.unwrap_or(default.max_withdrawals),
            )
        } else {
            AccountPolicy::default()
        }
    }
}
