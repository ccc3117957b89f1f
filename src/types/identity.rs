//! Identity-related types for the banking simulation
//!
//! An identity is the profile of a registered customer. It is created once by
//! the [`Bank`](crate::core::Bank) and shared, read-only, by every account the
//! customer owns.

use std::fmt;

/// National identifier of a customer
///
/// The only deduplication key for identities.
pub type NationalId = String;

/// Registered customer profile
///
/// Fields are private so an identity cannot change after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    birth_date: String,
    national_id: NationalId,
    address: String,
}

impl Identity {
    /// Create a new identity
    ///
    /// # Arguments
    ///
    /// * `name` - Full name of the customer
    /// * `birth_date` - Birth date as typed by the operator (DD/MM/YYYY)
    /// * `national_id` - Unique national identifier
    /// * `address` - Postal address
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        national_id: impl Into<NationalId>,
        address: impl Into<String>,
    ) -> Self {
        Identity {
            name: name.into(),
            birth_date: birth_date.into(),
            national_id: national_id.into(),
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {}, national ID: {}", self.name, self.national_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_all_fields() {
        let identity = Identity::new(
            "Ana",
            "01/02/1990",
            "12345678900",
            "Rua A - 1, Centro, Recife-PE",
        );

        assert_eq!(identity.name(), "Ana");
        assert_eq!(identity.birth_date(), "01/02/1990");
        assert_eq!(identity.national_id(), "12345678900");
        assert_eq!(identity.address(), "Rua A - 1, Centro, Recife-PE");
    }

    #[test]
    fn test_display_shows_name_and_national_id() {
        let identity = Identity::new("Ana", "01/02/1990", "123", "Somewhere");
        assert_eq!(identity.to_string(), "User: Ana, national ID: 123");
    }
}
