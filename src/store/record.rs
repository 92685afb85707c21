//! User Record Module
//!
//! Defines the user record stored by the service and the partial-update
//! type applied on PUT.

use serde::{Deserialize, Serialize};

// == User Record ==
/// A single user record.
///
/// Both `name` and `email` are optional; a record may be created with
/// either or both missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, unique for the process lifetime
    pub id: u64,
    /// Display name, if provided
    pub name: Option<String>,
    /// Email address, if provided
    pub email: Option<String>,
}

impl User {
    // == Constructor ==
    /// Creates a new user record with the given id and fields.
    pub fn new(id: u64, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name, email }
    }

    // == Apply Patch ==
    /// Shallow-merges a patch into this record.
    ///
    /// Only fields present in the patch are overwritten; absent fields
    /// keep their current value. The id is never touched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}

// == User Patch ==
/// Partial update for a user record.
///
/// A `None` field means "not provided, leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// Replacement name, if provided
    pub name: Option<String>,
    /// Replacement email, if provided
    pub email: Option<String>,
}

impl UserPatch {
    /// Returns true if the patch carries no fields.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
