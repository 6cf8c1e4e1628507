//! Schema migration command
//!
//! Usage: famtree migrate

use std::path::Path;

/// Open the store (which applies pending migrations) and report what is applied
pub fn execute(db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = famtree_store::db::open_store(db)?;

    for migration_id in famtree_store::migrations::applied_migrations(&conn)? {
        println!("✓ {}", migration_id);
    }
    Ok(())
}
