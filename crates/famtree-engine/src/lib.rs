//! famtree engine - orchestration layer
//!
//! Command handlers that coordinate core validation with the SQLite store
//! and own lifecycle logging for each operation.

pub mod commands;

pub use commands::engine_command::{apply_member_command, MemberCommand, MemberCommandResult};
pub use commands::member::MemberFilter;
