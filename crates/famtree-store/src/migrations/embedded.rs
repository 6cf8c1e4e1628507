//! Embedded SQL migrations
//!
//! Migrations are compiled in with include_str! and applied in list order.

/// Migration metadata
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_family_members",
            sql: include_str!("../../migrations/001_family_members.sql"),
        },
        Migration {
            id: "002_family_members_gender_index",
            sql: include_str!("../../migrations/002_family_members_gender_index.sql"),
        },
    ]
}
