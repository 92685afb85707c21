//! Store Module
//!
//! Provides the in-memory user record store.

mod record;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use record::{User, UserPatch};
pub use store::UserStore;

// == Public Constants ==
/// Id assigned to the first record ever inserted
pub const FIRST_USER_ID: u64 = 1;
