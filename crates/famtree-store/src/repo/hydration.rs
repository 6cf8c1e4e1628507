//! Hydration layer - loads family members from SQLite into the in-memory Store

use crate::errors::Result;
use crate::repo::SqliteRepo;
use famtree_core::errors::FamilyError;
use famtree_core::model::MemberId;
use famtree_core::ops::Store;
use rusqlite::Connection;

/// Load a single member into the Store
///
/// # Errors
/// * `NotFound` - If no row has this id
/// * `Validation` - If the stored row has a blank name or gender
pub fn load_member(conn: &Connection, id: MemberId, store: &mut Store) -> Result<()> {
    let member = SqliteRepo::get_member(conn, id)?
        .ok_or(FamilyError::MemberNotFound { member_id: id })?;
    store.restore_member(member)?;
    Ok(())
}

/// Load every member into the Store, returning how many were loaded
///
/// The Store's id counter ends up past the highest loaded id, so members
/// created in memory afterwards never collide with stored ones.
///
/// # Errors
/// * `Validation` - If a stored row has a blank name or gender
pub fn load_all_members(conn: &Connection, store: &mut Store) -> Result<usize> {
    let members = SqliteRepo::list_members(conn)?;
    let loaded = members.len();
    for member in members {
        tracing::debug!(member_id = member.id, "hydrating member");
        store.restore_member(member)?;
    }
    Ok(loaded)
}
