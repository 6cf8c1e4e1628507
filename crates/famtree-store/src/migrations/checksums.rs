//! Checksums for migrations
//!
//! A SHA-256 of each migration's SQL is recorded when it is applied so that
//! later edits to an already-applied migration are detected.

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 of a string
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
