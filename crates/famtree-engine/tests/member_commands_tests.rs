// Integration tests for member command handlers against in-memory SQLite

use famtree_core::errors::ExErrorKind;
use famtree_core::model::{MemberUpdate, NewMember};
use famtree_core_types::{RequestContext, RequestId, TraceId};
use famtree_engine::commands::member;
use famtree_engine::MemberFilter;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    famtree_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn ctx() -> RequestContext {
    RequestContext::new()
}

// ===== CREATE =====

#[test]
fn test_create_assigns_unique_ids() {
    let conn = setup_test_db();
    let a = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();
    let b = member::member_create(&conn, NewMember::new("Ben", "male"), &ctx()).unwrap();

    assert_ne!(a.id, b.id);
}

#[test]
fn test_create_with_empty_name_is_validation_error() {
    let conn = setup_test_db();
    let err = member::member_create(&conn, NewMember::new("", "male"), &ctx()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert_eq!(member::member_count(&conn, &ctx()).unwrap(), 0);
}

#[test]
fn test_create_with_empty_gender_is_validation_error() {
    let conn = setup_test_db();
    let err = member::member_create(&conn, NewMember::new("Ann", ""), &ctx()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert!(err.message().contains("gender"));
}

#[test]
fn test_create_normalizes_blank_photo() {
    let conn = setup_test_db();
    let member =
        member::member_create(&conn, NewMember::new("Ann", "female").with_photo(" "), &ctx())
            .unwrap();

    assert_eq!(member.photo, None);
    assert_eq!(member::member_read(&conn, member.id, &ctx()).unwrap().photo, None);
}

// ===== READ =====

#[test]
fn test_round_trip_alice() {
    let conn = setup_test_db();
    let created = member::member_create(
        &conn,
        NewMember::new("Alice", "female").with_photo("alice.jpg"),
        &ctx(),
    )
    .unwrap();

    let read = member::member_read(&conn, created.id, &ctx()).unwrap();
    assert_eq!(read.name, "Alice");
    assert_eq!(read.gender, "female");
    assert_eq!(read.photo.as_deref(), Some("alice.jpg"));
}

#[test]
fn test_read_never_assigned_id_is_not_found() {
    let conn = setup_test_db();
    let err = member::member_read(&conn, 404, &ctx()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("404"));
    assert_eq!(err.op(), Some("member_read"));
}

#[test]
fn test_error_carries_request_and_trace_id() {
    let conn = setup_test_db();
    let ctx = RequestContext::with_request_id(RequestId::from_string("req-42".to_string()))
        .with_trace_id(TraceId::from_string("trace-7".to_string()));

    let err = member::member_read(&conn, 1, &ctx).unwrap_err();

    assert_eq!(err.request_id().map(|r| r.as_str()), Some("req-42"));
    assert_eq!(err.trace_id().map(|t| t.as_str()), Some("trace-7"));
}

// ===== UPDATE =====

#[test]
fn test_update_bob_to_robert() {
    let mut conn = setup_test_db();
    let bob = member::member_create(&conn, NewMember::new("Bob", "male"), &ctx()).unwrap();

    member::member_update(&mut conn, bob.id, MemberUpdate::new().name("Robert"), &ctx()).unwrap();

    assert_eq!(member::member_read(&conn, bob.id, &ctx()).unwrap().name, "Robert");
}

#[test]
fn test_update_blank_gender_rolls_back() {
    let mut conn = setup_test_db();
    let bob = member::member_create(&conn, NewMember::new("Bob", "male"), &ctx()).unwrap();

    let err = member::member_update(
        &mut conn,
        bob.id,
        MemberUpdate::new().name("Robert").gender(""),
        &ctx(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Validation);
    let stored = member::member_read(&conn, bob.id, &ctx()).unwrap();
    assert_eq!(stored.name, "Bob");
    assert_eq!(stored.gender, "male");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut conn = setup_test_db();
    let err =
        member::member_update(&mut conn, 3, MemberUpdate::new().name("X"), &ctx()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_empty_update_requires_existing_member() {
    let mut conn = setup_test_db();
    let ann = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();

    let same = member::member_update(&mut conn, ann.id, MemberUpdate::new(), &ctx()).unwrap();
    assert_eq!(same, ann);

    let err =
        member::member_update(&mut conn, ann.id + 1, MemberUpdate::new(), &ctx()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_save_after_field_assignment() {
    let conn = setup_test_db();
    let mut ann = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();

    ann.photo = Some("ann.png".to_string());
    member::member_save(&conn, &ann, &ctx()).unwrap();

    assert_eq!(member::member_read(&conn, ann.id, &ctx()).unwrap(), ann);
}

#[test]
fn test_save_deleted_member_is_not_found() {
    let conn = setup_test_db();
    let ann = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();
    member::member_delete(&conn, ann.id, &ctx()).unwrap();

    let err = member::member_save(&conn, &ann, &ctx()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_save_unknown_id_with_blank_name_is_not_found() {
    let conn = setup_test_db();
    let mut ghost = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();
    member::member_delete(&conn, ghost.id, &ctx()).unwrap();
    ghost.name = "   ".to_string();

    let err = member::member_save(&conn, &ghost, &ctx()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

// ===== DELETE =====

#[test]
fn test_delete_then_read_is_not_found() {
    let conn = setup_test_db();
    let ann = member::member_create(&conn, NewMember::new("Ann", "female"), &ctx()).unwrap();

    member::member_delete(&conn, ann.id, &ctx()).unwrap();

    let err = member::member_read(&conn, ann.id, &ctx()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let conn = setup_test_db();
    let err = member::member_delete(&conn, 77, &ctx()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

// ===== LIST =====

#[test]
fn test_list_with_filters() {
    let conn = setup_test_db();
    for (name, gender) in [
        ("Father", "male"),
        ("Wife One", "female"),
        ("Wife Two", "female"),
        ("Child One", "male"),
    ] {
        member::member_create(&conn, NewMember::new(name, gender), &ctx()).unwrap();
    }

    let all = member::member_list(&conn, &MemberFilter::default(), &ctx()).unwrap();
    assert_eq!(all.len(), 4);

    let by_name = MemberFilter {
        name: Some("one".to_string()),
        gender: None,
    };
    let names: Vec<_> = member::member_list(&conn, &by_name, &ctx())
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Wife One", "Child One"]);

    let both = MemberFilter {
        name: Some("one".to_string()),
        gender: Some("MALE".to_string()),
    };
    let names: Vec<_> = member::member_list(&conn, &both, &ctx())
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Child One"]);
}
