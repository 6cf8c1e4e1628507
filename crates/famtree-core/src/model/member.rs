use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a family member
pub type MemberId = i64;

/// FamilyMember - one person's identity data as stored and retrieved
///
/// Instances exist only once persisted: the `id` is assigned by the storage
/// engine on creation and never reused. Use [`NewMember`] for data that has
/// not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Unique identifier assigned by the storage engine
    pub id: MemberId,

    /// Display name (required, non-empty)
    pub name: String,

    /// Opaque reference to an image resource (path or URL)
    pub photo: Option<String>,

    /// Gender as free text (required, non-empty)
    pub gender: String,
}

impl FamilyMember {
    /// Build a stored member from an id and the data it was created with
    pub fn from_new(id: MemberId, new: NewMember) -> Self {
        Self {
            id,
            name: new.name,
            photo: new.photo,
            gender: new.gender,
        }
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Apply a partial update in place
    ///
    /// Only fields set on `update` are touched. The result is not validated
    /// here; callers run the validation rules afterwards.
    pub fn apply(&mut self, update: MemberUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(photo) = update.photo {
            self.photo = photo;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
    }
}

/// Data for a family member that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub photo: Option<String>,
    pub gender: String,
}

impl NewMember {
    pub fn new(name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo: None,
            gender: gender.into(),
        }
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Partial mutation of a stored family member
///
/// `photo` is doubly optional: `None` leaves the photo alone, `Some(None)`
/// clears it, `Some(Some(p))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub photo: Option<Option<String>>,
    pub gender: Option<String>,
}

impl MemberUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(Some(photo.into()));
        self
    }

    pub fn clear_photo(mut self) -> Self {
        self.photo = Some(None);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.photo.is_none() && self.gender.is_none()
    }
}
