//! Engine-level member commands.
//!
//! A single entry point for front ends (the CLI today) that turn user input
//! into one command value and render one result value.

use crate::commands::member::{self, MemberFilter};
use famtree_core::model::{FamilyMember, MemberId, MemberUpdate, NewMember};
use famtree_core_types::RequestContext;
use famtree_store::errors::Result;
use rusqlite::Connection;

/// Member commands that require database I/O.
#[derive(Debug, Clone)]
pub enum MemberCommand {
    Create(NewMember),
    Read(MemberId),
    Update { id: MemberId, update: MemberUpdate },
    Delete(MemberId),
    List(MemberFilter),
}

/// Result of applying a member command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberCommandResult {
    /// The member as stored after create, read or update
    Member(FamilyMember),
    /// Id of the member that was removed
    Deleted(MemberId),
    Members(Vec<FamilyMember>),
}

/// Apply a member command.
pub fn apply_member_command(
    cmd: MemberCommand,
    conn: &mut Connection,
    ctx: &RequestContext,
) -> Result<MemberCommandResult> {
    match cmd {
        MemberCommand::Create(new) => {
            member::member_create(conn, new, ctx).map(MemberCommandResult::Member)
        }
        MemberCommand::Read(id) => {
            member::member_read(conn, id, ctx).map(MemberCommandResult::Member)
        }
        MemberCommand::Update { id, update } => {
            member::member_update(conn, id, update, ctx).map(MemberCommandResult::Member)
        }
        MemberCommand::Delete(id) => {
            member::member_delete(conn, id, ctx).map(|()| MemberCommandResult::Deleted(id))
        }
        MemberCommand::List(filter) => {
            member::member_list(conn, &filter, ctx).map(MemberCommandResult::Members)
        }
    }
}
