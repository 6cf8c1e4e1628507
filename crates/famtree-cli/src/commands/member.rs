//! Family member commands
//!
//! Usage:
//!   famtree member add --name <NAME> --gender <GENDER> [--photo <REF>]
//!   famtree member show <ID>
//!   famtree member update <ID> [--name ..] [--gender ..] [--photo .. | --clear-photo]
//!   famtree member delete <ID>
//!   famtree member list [--name <TERM>] [--gender <GENDER>]

use clap::{Args, Subcommand};
use famtree_core::model::{MemberId, MemberUpdate, NewMember};
use famtree_core_types::RequestContext;
use famtree_engine::{apply_member_command, MemberCommand, MemberCommandResult, MemberFilter};
use std::path::Path;

#[derive(Debug, Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub command: MemberSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum MemberSubcommand {
    /// Add a family member
    Add(AddArgs),
    /// Show one family member
    Show { id: MemberId },
    /// Change fields of a family member
    Update(UpdateArgs),
    /// Delete a family member
    Delete { id: MemberId },
    /// List family members
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub gender: String,

    /// Photo path or URL
    #[arg(long)]
    pub photo: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: MemberId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long, conflicts_with = "clear_photo")]
    pub photo: Option<String>,

    /// Remove the photo reference
    #[arg(long)]
    pub clear_photo: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the name
    #[arg(long)]
    pub name: Option<String>,

    /// Gender to match (case-insensitive)
    #[arg(long)]
    pub gender: Option<String>,
}

impl From<UpdateArgs> for MemberCommand {
    fn from(args: UpdateArgs) -> Self {
        let photo = if args.clear_photo {
            Some(None)
        } else {
            args.photo.map(Some)
        };
        MemberCommand::Update {
            id: args.id,
            update: MemberUpdate {
                name: args.name,
                photo,
                gender: args.gender,
            },
        }
    }
}

/// Execute a member command
pub fn execute(db: &Path, args: MemberArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = match args.command {
        MemberSubcommand::Add(add) => MemberCommand::Create(NewMember {
            name: add.name,
            photo: add.photo,
            gender: add.gender,
        }),
        MemberSubcommand::Show { id } => MemberCommand::Read(id),
        MemberSubcommand::Update(update) => update.into(),
        MemberSubcommand::Delete { id } => MemberCommand::Delete(id),
        MemberSubcommand::List(list) => MemberCommand::List(MemberFilter {
            name: list.name,
            gender: list.gender,
        }),
    };

    let mut conn = famtree_store::db::open_store(db)?;
    let ctx = RequestContext::new();

    match apply_member_command(cmd, &mut conn, &ctx)? {
        MemberCommandResult::Member(member) => {
            println!("{}", serde_json::to_string_pretty(&member)?)
        }
        MemberCommandResult::Members(members) => {
            println!("{}", serde_json::to_string_pretty(&members)?)
        }
        MemberCommandResult::Deleted(id) => println!("Deleted member {}", id),
    }
    Ok(())
}
