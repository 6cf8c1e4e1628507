pub mod member;
pub mod schema;

pub use member::{FamilyMember, MemberId, MemberUpdate, NewMember};
pub use schema::{ColumnDef, SqlType, TableSchema, FAMILY_MEMBERS};
