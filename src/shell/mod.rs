//! Interactive shell
//!
//! Text menu over the bank: reads operator answers, calls the registry and
//! the account ledger, prints results.
//!
//! - `menu` - Menu text and command keys
//! - `session` - The menu loop over generic input and output streams

pub mod menu;
pub mod session;

pub use menu::{MenuCommand, MENU};
pub use session::Session;
