//! User Store Module
//!
//! Main store engine: a HashMap keyed by id plus a monotonically
//! increasing id counter.

use std::collections::HashMap;

use crate::error::{ApiError, Result};
use crate::store::{User, UserPatch, FIRST_USER_ID};

// == User Store ==
/// In-memory user record store.
///
/// Ids come from an explicit counter rather than the current map size,
/// so a deleted id is never handed out again.
#[derive(Debug)]
pub struct UserStore {
    /// Id-keyed record storage
    records: HashMap<u64, User>,
    /// Next id to assign
    next_id: u64,
}

impl UserStore {
    // == Constructor ==
    /// Creates a new, empty UserStore.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: FIRST_USER_ID,
        }
    }

    // == Insert ==
    /// Creates a new record from the given fields and assigns it an id.
    ///
    /// Returns a clone of the stored record.
    pub fn insert(&mut self, name: Option<String>, email: Option<String>) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User::new(id, name, email);
        self.records.insert(id, user.clone());
        user
    }

    // == Get ==
    /// Retrieves a record by id.
    pub fn get(&self, id: u64) -> Result<User> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    // == List ==
    /// Returns all live records, keyed by id.
    pub fn list(&self) -> HashMap<u64, User> {
        self.records.clone()
    }

    // == Update ==
    /// Shallow-merges a patch into an existing record.
    ///
    /// Returns a clone of the updated record, or NotFound if the id is
    /// absent.
    pub fn update(&mut self, id: u64, patch: UserPatch) -> Result<User> {
        let user = self
            .records
            .get_mut(&id)
            .ok_or(ApiError::NotFound(id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    // == Remove ==
    /// Removes a record by id.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        if self.records.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::NotFound(id))
        }
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
