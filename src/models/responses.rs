//! Response DTOs for the user service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::User;

/// Response body for the welcome endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    /// Static welcome message
    pub message: String,
}

impl WelcomeResponse {
    /// Creates the static welcome payload
    pub fn new() -> Self {
        Self {
            message: "Welcome to the User REST API!".to_string(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body carrying a user record plus a status message
///
/// Used by both the create (POST /users) and update (PUT /users/:id)
/// operations, with operation-specific messages.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// Success message
    pub message: String,
    /// The affected record
    pub user: User,
}

impl UserResponse {
    /// Creates the response for a newly created record
    pub fn created(user: User) -> Self {
        Self {
            message: "User added successfully".to_string(),
            user,
        }
    }

    /// Creates the response for an updated record
    pub fn updated(user: User) -> Self {
        Self {
            message: "User updated".to_string(),
            user,
        }
    }
}

/// Response body for the delete operation (DELETE /users/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message naming the deleted id
    pub message: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: u64) -> Self {
        Self {
            message: format!("User {} deleted", id),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
