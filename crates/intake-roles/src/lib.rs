//! Intake Roles - role assignment resolver
//!
//! When a new `(company, contact)` pair is captured anywhere on the form,
//! this crate decides which role slots (referrer, insurance, bill-to) the
//! pair could fill, asks the user through a multi-select proposal, and
//! applies the confirmed roles — deduplicating companies across slots so
//! one company never occupies two entries.
//!
//! Company identity is the company name (case/whitespace-insensitive) or a
//! shared contact name; the role slot is never the identity.

pub mod company_type;
pub mod directory;
pub mod error;
pub mod resolver;

pub use company_type::{infer_company_type, is_national_carrier, CompanyType};
pub use directory::{ContactDirectory, DirectoryRecord};
pub use error::RoleError;
pub use resolver::{
    apply_roles, capture_pair, eligible_roles, upsert_role, CaptureSource, RoleAssignmentProposal,
};
