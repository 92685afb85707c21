//! Request DTOs for the user service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::store::UserPatch;

/// Request body for creating a user (POST /users)
///
/// # Fields
/// - `name`: Optional display name
/// - `email`: Optional email address
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Display name, if provided
    #[serde(default)]
    pub name: Option<String>,
    /// Email address, if provided
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for updating a user (PUT /users/:id)
///
/// Fields absent from the body are left unchanged on the record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    /// Replacement name, if provided
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement email, if provided
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}
