//! Account policy configuration
//!
//! The policy holds the withdrawal rules every account is created with. The
//! defaults are the bank's fixed rules: at most 3 withdrawals per period and
//! at most 500.00 per withdrawal.

use super::amount::format_amount;
use rust_decimal::Decimal;
use tracing::warn;

/// Default maximum amount for a single withdrawal
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default number of withdrawals allowed per period
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;

/// Withdrawal rules applied to an account
///
/// Copied into each account at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountPolicy {
    /// Maximum amount for a single withdrawal
    pub withdrawal_limit: Decimal,
    /// Maximum number of withdrawals before further ones are refused
    pub max_withdrawals: u32,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

impl AccountPolicy {
    /// Create a new AccountPolicy with custom values
    ///
    /// A non-positive withdrawal limit or a zero withdrawal cap cannot be
    /// satisfied by any withdrawal, so such values are replaced by the
    /// defaults and a warning is logged.
    pub fn new(withdrawal_limit: Decimal, max_withdrawals: u32) -> Self {
        let default = Self::default();

        let withdrawal_limit = if withdrawal_limit <= Decimal::ZERO {
            warn!(
                requested = %withdrawal_limit,
                fallback = %format_amount(default.withdrawal_limit),
                "invalid withdrawal limit, using default"
            );
            default.withdrawal_limit
        } else {
            withdrawal_limit
        };

        let max_withdrawals = if max_withdrawals == 0 {
            warn!(
                requested = max_withdrawals,
                fallback = default.max_withdrawals,
                "invalid withdrawal cap, using default"
            );
            default.max_withdrawals
        } else {
            max_withdrawals
        };

        Self {
            withdrawal_limit,
            max_withdrawals,
        }
    }
}
