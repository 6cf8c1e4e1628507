//! famtree core - family member model and in-memory semantics
//!
//! This crate provides:
//! - The `FamilyMember` record and its `FAMILY_MEMBERS` schema descriptor
//! - Field validation for required `name` and `gender`
//! - CRUD and lookup operations over an in-memory `Store`
//! - The error facility (`FamilyError`, `ExError`, `ExErrorKind`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FamilyError, Result};
pub use model::{FamilyMember, MemberId, MemberUpdate, NewMember, FAMILY_MEMBERS};
pub use ops::Store;
