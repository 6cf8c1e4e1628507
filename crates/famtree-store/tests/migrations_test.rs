// Integration tests for the migration framework

use famtree_core::errors::ExErrorKind;
use famtree_core::model::FAMILY_MEMBERS;
use famtree_store::migrations::{
    applied_migrations, apply_migrations, get_migrations, verify_schema,
};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    assert_eq!(
        tables,
        vec!["family_members", "schema_version", "sqlite_sequence"]
    );
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Re-running migrations should succeed");

    let applied = applied_migrations(&conn).unwrap();
    let expected: Vec<String> = get_migrations().iter().map(|m| m.id.to_string()).collect();
    assert_eq!(applied, expected);
}

#[test]
fn test_checksum_is_recorded() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            ["001_family_members"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_tampered_checksum_is_rejected() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_family_members'",
        [],
    )
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.op(), Some("migration_checksum"));
}

#[test]
fn test_migrated_table_matches_descriptor() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    assert!(verify_schema(&conn, &FAMILY_MEMBERS).is_ok());
}

#[test]
fn test_verify_schema_detects_missing_table() {
    let conn = setup_test_db();

    let err = verify_schema(&conn, &FAMILY_MEMBERS).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("does not exist"));
}

#[test]
fn test_verify_schema_detects_drift() {
    let conn = setup_test_db();
    conn.execute_batch(
        "CREATE TABLE family_members (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            photo TEXT NOT NULL,
            gender TEXT NOT NULL
        )",
    )
    .unwrap();

    let err = verify_schema(&conn, &FAMILY_MEMBERS).unwrap_err();
    assert!(err.message().contains("photo"), "got: {}", err);
}

#[test]
fn test_check_constraint_rejects_blank_name() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    for blank in ["'  '", "char(9)", "char(10)", "' ' || char(13) || char(10)"] {
        let result = conn.execute(
            &format!(
                "INSERT INTO family_members (name, photo, gender) VALUES ({}, NULL, 'male')",
                blank
            ),
            [],
        );
        assert!(result.is_err(), "name {} must violate the CHECK constraint", blank);
    }
}

#[test]
fn test_check_constraint_rejects_blank_gender() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    for blank in ["''", "char(9)", "char(10)", "char(9) || char(10)"] {
        let result = conn.execute(
            &format!(
                "INSERT INTO family_members (name, photo, gender) VALUES ('Ann', NULL, {})",
                blank
            ),
            [],
        );
        assert!(result.is_err(), "gender {} must violate the CHECK constraint", blank);
    }
}

#[test]
fn test_check_constraint_accepts_padded_values() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let inserted = conn
        .execute(
            "INSERT INTO family_members (name, photo, gender) \
             VALUES (char(9) || 'Ann' || char(10), NULL, ' female ')",
            [],
        )
        .unwrap();
    assert_eq!(inserted, 1);
}
