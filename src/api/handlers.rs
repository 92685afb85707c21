//! API Handlers
//!
//! HTTP request handlers for each user service endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::{
    CreateUserRequest, DeleteResponse, HealthResponse, UpdateUserRequest, UserResponse,
    WelcomeResponse,
};
use crate::store::{User, UserStore};

/// Application state shared across all handlers.
///
/// Contains the user store wrapped in Arc<RwLock<>> for thread-safe access.
/// The store is always passed in by handle; there is no global singleton.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe user store
    pub store: Arc<RwLock<UserStore>>,
}

impl AppState {
    /// Creates a new AppState with the given user store.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UserStore::new())
    }
}

/// Handler for GET /
///
/// Returns the static welcome payload.
pub async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}

/// Handler for GET /users
///
/// Returns all records as a JSON object keyed by id.
pub async fn list_users_handler(State(state): State<AppState>) -> Json<HashMap<u64, User>> {
    let store = state.store.read().await;
    Json(store.list())
}

/// Handler for GET /users/:id
///
/// Retrieves a single record by id.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    let store = state.store.read().await;
    let user = store.get(id)?;

    Ok(Json(user))
}

/// Handler for POST /users
///
/// Creates a record from the optional fields in the body and returns it
/// with status 201.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> (StatusCode, Json<UserResponse>) {
    let mut store = state.store.write().await;
    let user = store.insert(req.name, req.email);

    (StatusCode::CREATED, Json(UserResponse::created(user)))
}

/// Handler for PUT /users/:id
///
/// Shallow-merges the provided fields into an existing record.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    let mut store = state.store.write().await;
    let user = store.update(id, req.into())?;

    Ok(Json(UserResponse::updated(user)))
}

/// Handler for DELETE /users/:id
///
/// Removes a record by id.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.store.write().await;
    store.remove(id)?;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
