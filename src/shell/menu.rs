//! Menu commands of the interactive shell

use crate::types::BankError;
use std::str::FromStr;

/// Menu shown before every command
pub const MENU: &str = "
=============== MENU ================
[d]  Deposit
[s]  Withdraw
[e]  Statement
[nc] New account
[nu] New user
[lc] List accounts
[q]  Quit
=> ";

/// Operation selected from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    NewUser,
    ListAccounts,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = BankError;

    /// Parse a menu key, ignoring surrounding whitespace and case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" => Ok(MenuCommand::Deposit),
            "s" => Ok(MenuCommand::Withdraw),
            "e" => Ok(MenuCommand::Statement),
            "nc" => Ok(MenuCommand::NewAccount),
            "nu" => Ok(MenuCommand::NewUser),
            "lc" => Ok(MenuCommand::ListAccounts),
            "q" => Ok(MenuCommand::Quit),
            _ => Err(BankError::malformed_input("menu option", s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit("d", MenuCommand::Deposit)]
    #[case::withdraw("s", MenuCommand::Withdraw)]
    #[case::statement("e", MenuCommand::Statement)]
    #[case::new_account("nc", MenuCommand::NewAccount)]
    #[case::new_user("nu", MenuCommand::NewUser)]
    #[case::list_accounts("lc", MenuCommand::ListAccounts)]
    #[case::quit("q", MenuCommand::Quit)]
    #[case::uppercase("NU", MenuCommand::NewUser)]
    #[case::padded("  lc \n", MenuCommand::ListAccounts)]
    fn test_parse_menu_keys(#[case] raw: &str, #[case] expected: MenuCommand) {
        assert_eq!(raw.parse::<MenuCommand>().unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::unknown("x")]
    #[case::full_word("deposit")]
    fn test_parse_unknown_keys(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<MenuCommand>(),
            Err(BankError::MalformedInput { .. })
        ));
    }
}
