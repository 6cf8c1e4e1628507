//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and drift detection
//! - Idempotent application
//! - Embedded SQL migrations
//! - Verification of live tables against their schema descriptors

mod checksums;
mod embedded;
mod runner;
mod schema_check;

pub use embedded::{get_migrations, Migration};
pub use runner::{applied_migrations, apply_migrations};
pub use schema_check::verify_schema;
