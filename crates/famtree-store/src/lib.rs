//! famtree store - SQLite persistence for family members
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed migrations and schema verification (`migrations`)
//! - `SqliteRepo` row mapping and CRUD/queries, plus hydration into the
//!   in-memory `Store` (`repo`)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
