//! User API - A minimal in-memory user CRUD REST service
//!
//! Exposes create/read/update/delete operations over a single in-memory
//! collection of user records.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
