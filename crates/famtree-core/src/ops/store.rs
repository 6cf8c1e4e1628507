use std::collections::BTreeMap;

use crate::errors::{FamilyError, Result};
use crate::model::{FamilyMember, MemberId};
use crate::rules::validation;

/// In-memory store for family members
///
/// Plays the role of the storage engine for calling code that does not need
/// durability, and for tests. Ids come from a monotonically increasing
/// counter starting at 1 and are never handed out twice, even after a delete.
/// Not thread-safe; wrap it yourself if it must be shared.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) members: BTreeMap<MemberId, FamilyMember>,
    // None once i64::MAX has been handed out or loaded
    next_id: Option<MemberId>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
            next_id: Some(1),
        }
    }

    /// Reserve the next id
    ///
    /// # Errors
    ///
    /// Returns `IdSpaceExhausted` once `i64::MAX` is taken.
    pub(crate) fn allocate_id(&mut self) -> Result<MemberId> {
        let id = self.next_id.ok_or(FamilyError::IdSpaceExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Get a member by ID
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no member is stored under `id`.
    pub fn get_member(&self, id: MemberId) -> Result<&FamilyMember> {
        self.members
            .get(&id)
            .ok_or(FamilyError::MemberNotFound { member_id: id })
    }

    /// All members in id order
    pub fn list_members(&self) -> Vec<&FamilyMember> {
        self.members.values().collect()
    }

    /// Insert a member under its own id, replacing any previous entry
    ///
    /// The id counter is moved past `member.id` so later creates cannot
    /// collide. Callers validate first.
    pub(crate) fn insert_member(&mut self, member: FamilyMember) {
        if self.next_id.is_some_and(|next| member.id >= next) {
            self.next_id = member.id.checked_add(1);
        }
        self.members.insert(member.id, member);
    }

    /// Put back a member that already has an id, e.g. one loaded from SQLite
    ///
    /// # Errors
    ///
    /// Returns `MissingName` / `MissingGender` if a required field is blank.
    pub fn restore_member(&mut self, member: FamilyMember) -> Result<()> {
        validation::validate_member(&member)?;
        self.insert_member(member);
        Ok(())
    }

    /// Remove a member, returning it if it was present
    pub(crate) fn remove_member(&mut self, id: MemberId) -> Option<FamilyMember> {
        self.members.remove(&id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
