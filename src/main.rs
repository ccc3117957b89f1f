//! Bank Simulation CLI
//!
//! Menu-driven banking simulation over stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --script demos/session.txt
//! cargo run -- --script demos/session.txt --export accounts.csv
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5 --verbose
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not readable, I/O failure, export failure)

use bank_sim::cli::{self, CliArgs};
use bank_sim::{export_accounts, logging, Bank, BankError, Session};
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use tracing::info;

fn main() {
    let args = cli::parse_args();
    logging::init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), BankError> {
    let mut bank = Bank::with_policy(args.to_policy());
    let stdout = io::stdout();

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| BankError::Io {
                message: format!("cannot open {}: {}", path.display(), e),
            })?;
            info!(script = %path.display(), "replaying scripted session");
            Session::new(&mut bank, BufReader::new(file), stdout.lock()).run()?;
        }
        None => Session::new(&mut bank, io::stdin().lock(), stdout.lock()).run()?,
    }

    if let Some(path) = &args.export {
        export_accounts(&bank, path)?;
    }

    Ok(())
}
