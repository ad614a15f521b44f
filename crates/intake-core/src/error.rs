//! Error types for the engine facade
//!
//! Every variant wraps a rejected mutation from one of the sub-systems;
//! the document is unchanged whenever one is returned, and the message is
//! fit to show the user as-is.

use intake_model::ModelError;
use intake_roles::RoleError;
use intake_store::StoreError;

/// Top-level engine error
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// A guarded aggregate mutation was rejected
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A role capture was rejected
    #[error(transparent)]
    Role(#[from] RoleError),

    /// Persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through() {
        let err = IntakeError::from(ModelError::PrimaryCustomerProtected);
        assert_eq!(err.to_string(), "the primary customer cannot be removed");
    }
}
