//! Intake Core - engine facade
//!
//! The single mutation route the view layer talks to. The engine:
//! - owns the shared order document and the contact directory
//! - applies every edit as a synchronous atomic transition
//! - re-derives placeholder flags and the scope-bridge status strictly
//!   after each transition commits
//! - parks cascade-removal and role-assignment proposals until the user
//!   confirms or cancels, recomputing against the live document at commit
//! - runs the completeness audit on demand and once before save
//!
//! # Example
//!
//! ```rust,ignore
//! use intake_core::IntakeEngine;
//! use intake_cascade::SmartTrigger;
//! use intake_model::SmartValue;
//! use intake_roles::ContactDirectory;
//!
//! let mut engine = IntakeEngine::new(ContactDirectory::new());
//! engine.update_smart(SmartTrigger::MoldMildew, SmartValue::Yes);
//! let report = engine.audit();
//! println!("{}% complete", report.percent);
//! ```

pub mod engine;
pub mod error;

pub use engine::IntakeEngine;
pub use error::IntakeError;
