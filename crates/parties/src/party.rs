use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult};

/// Role of an identity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Customer,
    Supplier,
}

impl core::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PartyRole::Customer => f.write_str("Customer"),
            PartyRole::Supplier => f.write_str("Supplier"),
        }
    }
}

/// Common surface of every identity record: a display name, a contact
/// email and a role, dispatched statically.
pub trait Party {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn role(&self) -> PartyRole;
}

/// Minimal email shape check. Anything deeper is explicitly out of scope.
pub(crate) fn validate_email(email: &str) -> DomainResult<()> {
    if !email.contains('@') {
        return Err(DomainError::validation(
            "invalid email address: must contain '@'",
        ));
    }
    Ok(())
}
