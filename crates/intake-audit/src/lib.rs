//! Intake Audit - completeness audit
//!
//! A read-only pass over the order document that reports which required
//! fields are unset and a percent-complete score. The required set expands
//! with the document: lead-source detail only once a category is chosen,
//! mold coverage only on mold jobs, walkthrough and pricing blocks only in
//! the lifecycle stages that need them, and one item per unresolved
//! placeholder entity.
//!
//! The audit has no side effects and no cache; it is safe to re-run on
//! every edit while the panel is open and once before save.

pub mod report;

pub use report::{run_audit, AuditCategory, AuditMissingItem, AuditReport};
