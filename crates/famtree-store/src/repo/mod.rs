//! Repository layer for persisting family members to SQLite

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
