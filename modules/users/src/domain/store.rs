use std::collections::HashMap;
use std::collections::hash_map::Entry;

use parking_lot::RwLock;
use tracing::debug;

use super::error::DomainError;
use super::model::User;

/// In-memory storage for user records, keyed by id.
///
/// Every operation checks presence and mutates under a single lock
/// acquisition, so at most one record exists per id. Callers only ever see
/// clones; the store owns the records.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<i64, User>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user.
    ///
    /// # Errors
    /// Returns [`DomainError::DuplicateKey`] if `id` is already taken.
    pub fn create(&self, id: i64, name: impl Into<String>) -> Result<User, DomainError> {
        let mut users = self.users.write();
        match users.entry(id) {
            Entry::Occupied(_) => Err(DomainError::duplicate_key(id)),
            Entry::Vacant(slot) => {
                let user = slot.insert(User {
                    id,
                    name: name.into(),
                });
                debug!(id, "user inserted");
                Ok(user.clone())
            }
        }
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    /// Returns [`DomainError::NotFound`] if no user has this id.
    pub fn read(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Replace the name of an existing user.
    ///
    /// # Errors
    /// Returns [`DomainError::NotFound`] if no user has this id.
    pub fn update(&self, id: i64, name: impl Into<String>) -> Result<User, DomainError> {
        let mut users = self.users.write();
        let user = users.get_mut(&id).ok_or_else(|| DomainError::not_found(id))?;
        user.name = name.into();
        debug!(id, "user name replaced");
        Ok(user.clone())
    }

    /// Remove a user.
    ///
    /// # Errors
    /// Returns [`DomainError::NotFound`] if no user has this id.
    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.users.write().remove(&id).is_none() {
            return Err(DomainError::not_found(id));
        }
        debug!(id, "user removed");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
