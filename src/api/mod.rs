//! API Module
//!
//! HTTP handlers and routing for the user service REST API.
//!
//! # Endpoints
//! - `GET /` - Welcome message
//! - `GET /users` - List all users
//! - `GET /users/:id` - Retrieve a user by id
//! - `POST /users` - Create a user
//! - `PUT /users/:id` - Update a user
//! - `DELETE /users/:id` - Delete a user
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
