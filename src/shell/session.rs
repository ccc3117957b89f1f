//! Interactive menu session
//!
//! A `Session` reads menu answers line by line from any `BufRead`, routes them
//! to the [`Bank`] and the account [`Ledger`], and writes prompts and results
//! to any `Write`. Rejected operations are printed and the menu is shown
//! again; only I/O failures on the streams end the session with an error.
//! End of input ends the session like `q`.

use crate::core::{Bank, Ledger};
use crate::shell::menu::{MenuCommand, MENU};
use crate::types::{parse_amount, AccountNumber, BankError};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Printed when the operator quits
pub const FAREWELL: &str = "Thank you for banking with us";

/// Printed for an unknown menu key
pub const INVALID_OPERATION: &str =
    "Invalid operation, please select the desired operation again";

const FRAME: &str = "=====";

/// What a completed operation prints
#[derive(Debug, Clone, PartialEq)]
enum Reply {
    /// Short status message, framed line by line
    Status(String),
    /// Multi-line report printed as is
    Report(String),
}

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven session over a bank
pub struct Session<'a, R, W> {
    bank: &'a mut Bank,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(bank: &'a mut Bank, input: R, output: W) -> Self {
        Session {
            bank,
            input,
            output,
        }
    }

    /// Run the menu loop until `q` or end of input
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), BankError> {
        info!("session started");

        loop {
            let Some(answer) = self.prompt(MENU)? else {
                break;
            };

            let flow = match answer.parse::<MenuCommand>() {
                Ok(MenuCommand::Quit) => Flow::Quit,
                Ok(command) => self.dispatch(command)?,
                Err(_) => {
                    warn!(option = answer.trim(), "unknown menu option");
                    self.print_status(INVALID_OPERATION)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.print_status(FAREWELL)?;
        info!("session ended");
        Ok(())
    }

    /// Consume the session and return the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<Flow, BankError> {
        let outcome = match command {
            MenuCommand::Deposit => self.deposit(),
            MenuCommand::Withdraw => self.withdraw(),
            MenuCommand::Statement => self.statement(),
            MenuCommand::NewAccount => self.new_account(),
            MenuCommand::NewUser => self.new_user(),
            MenuCommand::ListAccounts => Ok(Some(Reply::Report(
                self.bank.list_accounts().to_string(),
            ))),
            MenuCommand::Quit => return Ok(Flow::Quit),
        };

        match outcome {
            Ok(Some(Reply::Status(message))) => self.print_status(&message)?,
            Ok(Some(Reply::Report(report))) => writeln!(self.output, "{}", report)?,
            Ok(None) => return Ok(Flow::Quit),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(?command, error = %e, "operation rejected");
                self.print_status(&e.to_string())?;
            }
        }

        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Option<Reply>, BankError> {
        let Some(number) = self.read_account_number()? else {
            return Ok(None);
        };
        self.ensure_account(number)?;
        let Some(raw) = self.prompt("Enter the deposit amount: ")? else {
            return Ok(None);
        };
        let amount = parse_amount(&raw)?;

        let receipt = self.bank.account_mut(number)?.deposit(amount)?;
        Ok(Some(Reply::Status(receipt.to_string())))
    }

    fn withdraw(&mut self) -> Result<Option<Reply>, BankError> {
        let Some(number) = self.read_account_number()? else {
            return Ok(None);
        };
        self.ensure_account(number)?;
        let Some(raw) = self.prompt("Enter the withdrawal amount: ")? else {
            return Ok(None);
        };
        let amount = parse_amount(&raw)?;

        let receipt = self.bank.account_mut(number)?.withdraw(amount)?;
        Ok(Some(Reply::Status(receipt.to_string())))
    }

    fn statement(&mut self) -> Result<Option<Reply>, BankError> {
        let Some(number) = self.read_account_number()? else {
            return Ok(None);
        };
        let account = self
            .bank
            .find_account(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        Ok(Some(Reply::Report(account.statement())))
    }

    fn new_account(&mut self) -> Result<Option<Reply>, BankError> {
        let Some(national_id) =
            self.prompt("Enter the user's national ID to link the new account: ")?
        else {
            return Ok(None);
        };

        let account = self.bank.create_account(national_id.trim())?;
        Ok(Some(Reply::Status(format!(
            "Account created successfully!\n{}",
            account.summary()
        ))))
    }

    fn new_user(&mut self) -> Result<Option<Reply>, BankError> {
        let Some(name) = self.prompt("Enter the user's name: ")? else {
            return Ok(None);
        };
        let Some(birth_date) = self.prompt("Birth date (DD/MM/YYYY): ")? else {
            return Ok(None);
        };
        let Some(national_id) = self.prompt("Enter the user's national ID (digits only): ")?
        else {
            return Ok(None);
        };
        let Some(address) =
            self.prompt("Enter the address (street - number, district, city-state): ")?
        else {
            return Ok(None);
        };

        self.bank.create_identity(
            name.trim(),
            birth_date.trim(),
            national_id.trim(),
            address.trim(),
        )?;
        Ok(Some(Reply::Status("User created successfully!".to_string())))
    }

    /// Fail early so the operator is not asked for an amount on an unknown account
    fn ensure_account(&self, number: AccountNumber) -> Result<(), BankError> {
        match self.bank.find_account(number) {
            Some(_) => Ok(()),
            None => Err(BankError::account_not_found(number)),
        }
    }

    /// Ask for an account number
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_account_number(&mut self) -> Result<Option<AccountNumber>, BankError> {
        let Some(raw) = self.prompt("Enter the account number: ")? else {
            return Ok(None);
        };

        raw.trim()
            .parse::<AccountNumber>()
            .map(Some)
            .map_err(|_| BankError::malformed_input("account number", raw.trim()))
    }

    /// Write `text`, flush, and read one answer line without its line ending
    ///
    /// Returns `Ok(None)` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, BankError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print a message preceded by a blank line, each line framed by `=====`
    fn print_status(&mut self, message: &str) -> Result<(), BankError> {
        writeln!(self.output)?;
        for line in message.lines() {
            writeln!(self.output, "{} {} {}", FRAME, line, FRAME)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn run_script(bank: &mut Bank, script: &str) -> String {
        let mut session = Session::new(bank, script.as_bytes(), Vec::new());
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_quit_prints_farewell() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "q\n");

        assert!(output.starts_with(MENU));
        assert!(output.ends_with("===== Thank you for banking with us =====\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "");

        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_unknown_option_shows_menu_again() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "x\nq\n");

        assert!(output.contains(INVALID_OPERATION));
        assert_eq!(output.matches("=============== MENU").count(), 2);
    }

    #[test]
    fn test_new_user_and_account() {
        let mut bank = Bank::new();

        let output = run_script(
            &mut bank,
            "nu\nAna\n01/02/1990\n123\nRua A - 1, Centro, Recife-PE\nnc\n123\nq\n",
        );

        assert!(output.contains("===== User created successfully! ====="));
        assert!(output.contains("===== Account created successfully! ====="));
        assert!(output.contains(
            "===== Account No. 1, Agency: 0001, User: Ana, national ID: 123 ====="
        ));
        assert_eq!(
            bank.find_identity("123").unwrap().address(),
            "Rua A - 1, Centro, Recife-PE"
        );
    }

    #[test]
    fn test_deposit_on_unknown_account_skips_amount_prompt() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "d\n7\nq\n");

        assert!(output.contains("===== Account 7 not found ====="));
        assert!(!output.contains("Enter the deposit amount"));
    }

    #[test]
    fn test_malformed_account_number_is_reported() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "s\nseven\nq\n");

        assert!(output.contains("===== Malformed account number: 'seven' ====="));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_deposit_withdraw_and_statement() {
        let mut bank = Bank::new();
        bank.create_identity("Ana", "", "123", "").unwrap();
        bank.create_account("123").unwrap();

        let output = run_script(&mut bank, "d\n1\n1000\ns\n1\n500\ne\n1\nq\n");

        assert!(output.contains("===== Deposit completed successfully! ====="));
        assert!(output.contains("===== Account balance: 500.00 ====="));
        assert!(output.contains("===== Withdrawals remaining: 2 ====="));
        assert!(output.contains("Ana: Deposit: + 1000.00\nAna: Withdrawal: - 500.00\n"));
        assert_eq!(bank.find_account(1).unwrap().balance(), Decimal::new(500, 0));
    }

    #[test]
    fn test_rejected_withdrawal_is_printed() {
        let mut bank = Bank::new();
        bank.create_identity("Ana", "", "123", "").unwrap();
        bank.create_account("123").unwrap();

        let output = run_script(&mut bank, "s\n1\n0\nq\n");

        assert!(output.contains(
            "===== Invalid withdrawal value: the amount must be greater than zero ====="
        ));
    }

    #[test]
    fn test_end_of_input_mid_command_ends_session() {
        let mut bank = Bank::new();
        bank.create_identity("Ana", "", "123", "").unwrap();
        bank.create_account("123").unwrap();

        let output = run_script(&mut bank, "d\n1\n");

        assert!(output.ends_with("===== Thank you for banking with us =====\n"));
        assert_eq!(bank.find_account(1).unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_crlf_line_endings_are_accepted() {
        let mut bank = Bank::new();

        let output = run_script(&mut bank, "nu\r\nAna\r\n\r\n1\r\n\r\nlc\r\nq\r\n");

        assert!(!output.contains("Account No."));
        assert!(output.contains("No accounts registered."));
        assert!(bank.find_identity("1").is_some());
    }
}
