//! Error types for the order model
//!
//! Every rejected mutation carries a user-facing message; the document is
//! left unchanged whenever one of these is returned.

use crate::id::{AddressId, CustomerId};
use crate::RoleKind;

/// Model mutation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The primary customer is protected from deletion
    #[error("the primary customer cannot be removed")]
    PrimaryCustomerProtected,

    /// Customer handle did not resolve
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Address handle did not resolve
    #[error("address not found: {0}")]
    AddressNotFound(AddressId),

    /// Role slot did not resolve
    #[error("no company entry in slot: {0}")]
    RoleSlotEmpty(RoleKind),

    /// Entry still holds an assignable role
    #[error("company entry still holds the {0} role; reassign it first")]
    RoleStillAssigned(RoleKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = ModelError::PrimaryCustomerProtected;
        assert_eq!(err.to_string(), "the primary customer cannot be removed");

        let err = ModelError::RoleStillAssigned(RoleKind::Insurance);
        assert!(err.to_string().contains("insurance"));
    }
}
