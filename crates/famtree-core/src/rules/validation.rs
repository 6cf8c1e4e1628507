//! Field validation for family members
//!
//! `name` and `gender` are required: present and non-empty after trimming
//! whitespace. `photo` is an opaque reference and is never format-checked;
//! blank input is normalized to "absent".

use crate::errors::{FamilyError, Result};
use crate::model::{FamilyMember, NewMember};

/// Validate a member name
///
/// # Errors
/// * `MissingName` - If the name is empty or whitespace-only
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FamilyError::MissingName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Validate a member gender
///
/// # Errors
/// * `MissingGender` - If the gender is empty or whitespace-only
pub fn validate_gender(gender: &str) -> Result<()> {
    if gender.trim().is_empty() {
        return Err(FamilyError::MissingGender {
            reason: "Gender cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Validate the data for a member about to be created
///
/// Name is checked before gender, so a record missing both reports the name.
///
/// # Errors
/// * `MissingName` / `MissingGender` - see [`validate_name`] and [`validate_gender`]
pub fn validate_new_member(new: &NewMember) -> Result<()> {
    validate_name(&new.name)?;
    validate_gender(&new.gender)
}

/// Validate a stored member before it is re-persisted
///
/// # Errors
/// * `MissingName` / `MissingGender` - see [`validate_name`] and [`validate_gender`]
pub fn validate_member(member: &FamilyMember) -> Result<()> {
    validate_name(&member.name)?;
    validate_gender(&member.gender)
}

/// Collapse a blank photo reference to `None`
///
/// Forms submit an empty string when no photo is chosen; that is stored as
/// absent rather than as an empty reference.
pub fn normalize_photo(photo: Option<String>) -> Option<String> {
    photo.filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_member() {
        assert!(validate_new_member(&NewMember::new("Alice", "female")).is_ok());
    }

    #[test]
    fn test_missing_both_reports_name() {
        let result = validate_new_member(&NewMember::default());
        assert!(matches!(result, Err(FamilyError::MissingName { .. })));
    }

    #[test]
    fn test_blank_gender() {
        let result = validate_new_member(&NewMember::new("Alice", " \t"));
        assert!(matches!(result, Err(FamilyError::MissingGender { .. })));
    }

    #[test]
    fn test_normalize_photo() {
        assert_eq!(normalize_photo(None), None);
        assert_eq!(normalize_photo(Some(String::new())), None);
        assert_eq!(normalize_photo(Some("   ".to_string())), None);
        assert_eq!(
            normalize_photo(Some("alice.jpg".to_string())),
            Some("alice.jpg".to_string())
        );
    }
}
