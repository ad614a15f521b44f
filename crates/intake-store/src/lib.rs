//! Intake Store - persistence boundary
//!
//! The order round-trips as one JSON blob under a fixed key in a
//! [`BlobStore`]. This crate is the only place legacy data shapes are
//! tolerated: on the way in it fills missing fields from the default
//! document, restores single-element defaults for empty entity arrays,
//! translates the historical `"TBD"` street sentinel into a placeholder
//! flag, reconciles the two selected-groups lists, and canonicalizes
//! blocker ids. Nothing past this boundary sees a malformed document.

pub mod blob;
pub mod persist;

pub use blob::{BlobStore, FileStore, MemoryStore};
pub use persist::{load_order, save_order, StoreError, ORDER_KEY};
