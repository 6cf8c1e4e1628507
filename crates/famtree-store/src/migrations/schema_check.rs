//! Verification of live tables against schema descriptors

use crate::errors::{from_rusqlite, schema_mismatch, Result};
use famtree_core::model::TableSchema;
use rusqlite::Connection;

struct LiveColumn {
    name: String,
    decl_type: String,
    not_null: bool,
    primary_key: bool,
}

fn live_columns(conn: &Connection, table: &str) -> Result<Vec<LiveColumn>> {
    let mut stmt = conn
        .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(from_rusqlite)?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(LiveColumn {
                name: row.get(0)?,
                decl_type: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                primary_key: row.get::<_, i64>(3)? != 0,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(columns)
}

/// Check that `schema.table` exists with exactly the described columns
///
/// Column order, declared type, nullability and primary key must all match.
/// Primary key nullability is not compared: SQLite reports an
/// `INTEGER PRIMARY KEY` as nullable even though it never holds NULL.
///
/// # Errors
/// * `ConstraintViolation` - If the table is missing or any column differs
pub fn verify_schema(conn: &Connection, schema: &TableSchema) -> Result<()> {
    let live = live_columns(conn, schema.table)?;
    if live.is_empty() {
        return Err(schema_mismatch(schema.table, "table does not exist"));
    }
    if live.len() != schema.columns.len() {
        return Err(schema_mismatch(
            schema.table,
            &format!(
                "expected {} columns, found {}",
                schema.columns.len(),
                live.len()
            ),
        ));
    }

    for (expected, actual) in schema.columns.iter().zip(&live) {
        if expected.name != actual.name {
            return Err(schema_mismatch(
                schema.table,
                &format!("expected column '{}', found '{}'", expected.name, actual.name),
            ));
        }
        if !actual.decl_type.eq_ignore_ascii_case(expected.sql_type.as_sql()) {
            return Err(schema_mismatch(
                schema.table,
                &format!(
                    "column '{}' has type {}, expected {}",
                    actual.name,
                    actual.decl_type,
                    expected.sql_type.as_sql()
                ),
            ));
        }
        if expected.primary_key != actual.primary_key {
            return Err(schema_mismatch(
                schema.table,
                &format!("column '{}' primary key flag differs", actual.name),
            ));
        }
        if !expected.primary_key && expected.nullable == actual.not_null {
            return Err(schema_mismatch(
                schema.table,
                &format!("column '{}' nullability differs", actual.name),
            ));
        }
    }

    Ok(())
}
