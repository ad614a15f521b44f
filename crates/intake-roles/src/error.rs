//! Error types for role capture

/// Role capture/assignment errors
///
/// Each variant's message is user-facing; the document is unchanged when
/// one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    /// A contact was captured with no company attached
    #[error("a contact needs a company; enter the company name first")]
    ContactWithoutCompany,

    /// Both sides of the pair are blank
    #[error("nothing to capture: company and contact are both blank")]
    EmptyCapture,
}
