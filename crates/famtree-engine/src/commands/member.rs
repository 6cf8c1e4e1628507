//! Family member command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for member operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.
//! Every event carries the request id of the `RequestContext`, and so does
//! every returned error.

use famtree_core::errors::{ExError, FamilyError};
use famtree_core::model::{FamilyMember, MemberId, MemberUpdate, NewMember};
use famtree_core::rules::validation;
use famtree_core::{log_op_end, log_op_error, log_op_start};
use famtree_core_types::RequestContext;
use famtree_store::errors::Result;
use famtree_store::SqliteRepo;
use rusqlite::Connection;
use std::time::Instant;

/// Run `f` between start/end logging for `op`
fn logged<T>(op: &'static str, ctx: &RequestContext, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(
        op,
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_str()
    );
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = ctx.request_id.as_str()
            );
            Ok(value)
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = ctx.request_id.as_str()
            );
            let err = err.with_request_id(ctx.request_id.clone());
            Err(match &ctx.trace_id {
                Some(trace_id) => err.with_trace_id(trace_id.clone()),
                None => err,
            })
        }
    }
}

fn not_found(id: MemberId, op: &str) -> ExError {
    ExError::from(FamilyError::MemberNotFound { member_id: id }).with_op(op)
}

/// Create a new family member
///
/// ## Errors
///
/// - `Validation`: name or gender missing/blank
/// - `Persistence`: database error
pub fn member_create(
    conn: &Connection,
    new: NewMember,
    ctx: &RequestContext,
) -> Result<FamilyMember> {
    logged("member_create", ctx, || {
        validation::validate_new_member(&new)?;
        let new = NewMember {
            photo: validation::normalize_photo(new.photo),
            ..new
        };
        let member = SqliteRepo::insert_member(conn, &new)?;
        tracing::debug!(member_id = member.id, "member created");
        Ok(member)
    })
}

/// Read a family member by ID
///
/// ## Errors
///
/// - `NotFound`: no member with this id
pub fn member_read(conn: &Connection, id: MemberId, ctx: &RequestContext) -> Result<FamilyMember> {
    logged("member_read", ctx, || {
        SqliteRepo::get_member(conn, id)?.ok_or_else(|| not_found(id, "member_read"))
    })
}

/// Apply a partial update and return the stored result
///
/// Read, merge, validate and write run in one transaction.
///
/// ## Errors
///
/// - `NotFound`: no member with this id
/// - `Validation`: the update blanks name or gender
pub fn member_update(
    conn: &mut Connection,
    id: MemberId,
    update: MemberUpdate,
    ctx: &RequestContext,
) -> Result<FamilyMember> {
    logged("member_update", ctx, || {
        let tx = conn
            .transaction()
            .map_err(famtree_store::errors::from_rusqlite)?;

        let mut member =
            SqliteRepo::get_member(&tx, id)?.ok_or_else(|| not_found(id, "member_update"))?;
        member.apply(update);
        member.photo = validation::normalize_photo(member.photo);
        validation::validate_member(&member)?;

        SqliteRepo::update_member(&tx, &member)?;
        tx.commit().map_err(famtree_store::errors::from_rusqlite)?;
        Ok(member)
    })
}

/// Re-persist a member mutated by direct field assignment
///
/// The id is checked before the fields, as in [`member_update`].
///
/// ## Errors
///
/// - `NotFound`: `member.id` is not stored
/// - `Validation`: name or gender blank
pub fn member_save(conn: &Connection, member: &FamilyMember, ctx: &RequestContext) -> Result<()> {
    logged("member_save", ctx, || {
        if SqliteRepo::get_member(conn, member.id)?.is_none() {
            return Err(not_found(member.id, "member_save"));
        }
        validation::validate_member(member)?;
        let member = FamilyMember {
            photo: validation::normalize_photo(member.photo.clone()),
            ..member.clone()
        };
        SqliteRepo::update_member(conn, &member)?;
        Ok(())
    })
}

/// Delete a family member
///
/// ## Errors
///
/// - `NotFound`: no member with this id (delete is not a silent no-op)
pub fn member_delete(conn: &Connection, id: MemberId, ctx: &RequestContext) -> Result<()> {
    logged("member_delete", ctx, || {
        if !SqliteRepo::delete_member(conn, id)? {
            return Err(not_found(id, "member_delete"));
        }
        Ok(())
    })
}

/// Filter for [`member_list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive exact gender
    pub gender: Option<String>,
}

/// List members, optionally filtered by name and/or gender, in id order
pub fn member_list(
    conn: &Connection,
    filter: &MemberFilter,
    ctx: &RequestContext,
) -> Result<Vec<FamilyMember>> {
    logged("member_list", ctx, || {
        let members = match (&filter.name, &filter.gender) {
            (Some(term), None) => SqliteRepo::search_members_by_name(conn, term)?,
            (None, Some(gender)) => SqliteRepo::list_members_by_gender(conn, gender)?,
            (Some(term), Some(gender)) => SqliteRepo::search_members_by_name(conn, term)?
                .into_iter()
                .filter(|m| m.gender.eq_ignore_ascii_case(gender))
                .collect(),
            (None, None) => SqliteRepo::list_members(conn)?,
        };
        tracing::debug!(result_len = members.len(), "members listed");
        Ok(members)
    })
}

/// Number of stored members
pub fn member_count(conn: &Connection, ctx: &RequestContext) -> Result<usize> {
    logged("member_count", ctx, || SqliteRepo::count_members(conn))
}
