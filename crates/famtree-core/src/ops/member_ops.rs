use crate::errors::{FamilyError, Result};
use crate::model::{FamilyMember, MemberId, MemberUpdate, NewMember};
use crate::rules::validation;

use super::store::Store;

/// Create a new family member
///
/// Validates the input, assigns the next id, and stores the record. A blank
/// photo reference is stored as absent.
///
/// # Errors
/// * `MissingName` - If name is empty or whitespace-only
/// * `MissingGender` - If gender is empty or whitespace-only
/// * `IdSpaceExhausted` - If `i64::MAX` is already taken
pub fn create_member(store: &mut Store, new: NewMember) -> Result<FamilyMember> {
    validation::validate_new_member(&new)?;

    let new = NewMember {
        photo: validation::normalize_photo(new.photo),
        ..new
    };
    let member = FamilyMember::from_new(store.allocate_id()?, new);
    store.insert_member(member.clone());

    Ok(member)
}

/// Read a family member by ID
///
/// # Errors
/// * `MemberNotFound` - If no member has this id
pub fn read_member(store: &Store, id: MemberId) -> Result<&FamilyMember> {
    store.get_member(id)
}

/// Apply a partial update to a family member
///
/// The merged record must pass the same rules as a create. On error the
/// stored record is left untouched.
///
/// # Errors
/// * `MemberNotFound` - If no member has this id
/// * `MissingName` / `MissingGender` - If the update blanks a required field
pub fn update_member(
    store: &mut Store,
    id: MemberId,
    update: MemberUpdate,
) -> Result<FamilyMember> {
    let mut updated = store.get_member(id)?.clone();
    updated.apply(update);
    updated.photo = validation::normalize_photo(updated.photo);
    validation::validate_member(&updated)?;

    store.insert_member(updated.clone());
    Ok(updated)
}

/// Re-persist a member that was mutated by direct field assignment
///
/// # Errors
/// * `MemberNotFound` - If `member.id` is not stored
/// * `MissingName` / `MissingGender` - If a required field is blank
pub fn save_member(store: &mut Store, member: &FamilyMember) -> Result<()> {
    if !store.contains(member.id) {
        return Err(FamilyError::MemberNotFound {
            member_id: member.id,
        });
    }
    validation::validate_member(member)?;

    let mut member = member.clone();
    member.photo = validation::normalize_photo(member.photo);
    store.insert_member(member);
    Ok(())
}

/// Delete a family member
///
/// Deleting an id that is not stored reports `MemberNotFound`, the same as
/// reading it would.
///
/// # Errors
/// * `MemberNotFound` - If no member has this id
pub fn delete_member(store: &mut Store, id: MemberId) -> Result<()> {
    store
        .remove_member(id)
        .map(|_| ())
        .ok_or(FamilyError::MemberNotFound { member_id: id })
}

/// List all members in id order
pub fn list_members(store: &Store) -> Vec<&FamilyMember> {
    store.list_members()
}

/// Members whose name contains `term`, ignoring ASCII case
///
/// An empty term matches every member.
pub fn search_members_by_name<'a>(store: &'a Store, term: &str) -> Vec<&'a FamilyMember> {
    let needle = term.to_ascii_lowercase();
    store
        .list_members()
        .into_iter()
        .filter(|m| m.name.to_ascii_lowercase().contains(&needle))
        .collect()
}

/// Members whose gender equals `gender`, ignoring ASCII case
pub fn list_members_by_gender<'a>(store: &'a Store, gender: &str) -> Vec<&'a FamilyMember> {
    store
        .list_members()
        .into_iter()
        .filter(|m| m.gender.eq_ignore_ascii_case(gender))
        .collect()
}

/// Number of stored members
pub fn count_members(store: &Store) -> usize {
    store.len()
}
