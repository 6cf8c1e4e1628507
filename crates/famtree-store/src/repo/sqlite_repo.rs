//! SQLite repository implementation
//!
//! Maps `FamilyMember` to rows of the `family_members` table. Column lists
//! come from the `FAMILY_MEMBERS` descriptor so that row mapping and the
//! migrated table cannot drift apart silently.

use crate::errors::{from_rusqlite, Result};
use famtree_core::model::{FamilyMember, MemberId, NewMember, FAMILY_MEMBERS};
use rusqlite::{Connection, OptionalExtension, Row};

/// SQLite repository for family members
///
/// Stateless: every method takes the connection (or a transaction, which
/// derefs to one) to run against. Validation is the caller's job; the
/// table's CHECK constraints are the last line.
pub struct SqliteRepo;

fn select_sql(suffix: &str) -> String {
    format!(
        "SELECT {} FROM {} {}",
        FAMILY_MEMBERS.column_list(),
        FAMILY_MEMBERS.table,
        suffix
    )
}

/// Map a row selected with the descriptor's column list
fn member_from_row(row: &Row<'_>) -> rusqlite::Result<FamilyMember> {
    Ok(FamilyMember {
        id: row.get(0)?,
        name: row.get(1)?,
        photo: row.get(2)?,
        gender: row.get(3)?,
    })
}

impl SqliteRepo {
    /// Insert a new member and return it with its storage-assigned id
    pub fn insert_member(conn: &Connection, new: &NewMember) -> Result<FamilyMember> {
        conn.execute(
            "INSERT INTO family_members (name, photo, gender) VALUES (?1, ?2, ?3)",
            rusqlite::params![new.name, new.photo, new.gender],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(member_id = id, "member row inserted");

        Ok(FamilyMember::from_new(id, new.clone()))
    }

    /// Get a member by ID
    pub fn get_member(conn: &Connection, id: MemberId) -> Result<Option<FamilyMember>> {
        conn.query_row(&select_sql("WHERE id = ?1"), [id], member_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Overwrite every field of an existing member
    ///
    /// Returns `false` when no row has `member.id`.
    pub fn update_member(conn: &Connection, member: &FamilyMember) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE family_members SET name = ?1, photo = ?2, gender = ?3 WHERE id = ?4",
                rusqlite::params![member.name, member.photo, member.gender, member.id],
            )
            .map_err(from_rusqlite)?;

        Ok(changed > 0)
    }

    /// Delete a member by ID
    ///
    /// Returns `false` when no row had this id.
    pub fn delete_member(conn: &Connection, id: MemberId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM family_members WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        Ok(changed > 0)
    }

    /// All members ordered by id
    pub fn list_members(conn: &Connection) -> Result<Vec<FamilyMember>> {
        Self::query_members(conn, &select_sql("ORDER BY id"), rusqlite::params![])
    }

    /// Members whose name contains `term`, ignoring ASCII case
    pub fn search_members_by_name(conn: &Connection, term: &str) -> Result<Vec<FamilyMember>> {
        Self::query_members(
            conn,
            &select_sql("WHERE instr(lower(name), lower(?1)) > 0 ORDER BY id"),
            [term],
        )
    }

    /// Members whose gender equals `gender`, ignoring ASCII case
    pub fn list_members_by_gender(conn: &Connection, gender: &str) -> Result<Vec<FamilyMember>> {
        Self::query_members(
            conn,
            &select_sql("WHERE lower(gender) = lower(?1) ORDER BY id"),
            [gender],
        )
    }

    /// Number of stored members
    pub fn count_members(conn: &Connection) -> Result<usize> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM family_members", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn query_members<P: rusqlite::Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<FamilyMember>> {
        let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
        let members = stmt
            .query_map(params, member_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_uses_descriptor_columns() {
        assert_eq!(
            select_sql("ORDER BY id"),
            "SELECT id, name, photo, gender FROM family_members ORDER BY id"
        );
    }
}
