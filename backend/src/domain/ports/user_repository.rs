//! Port abstraction for the users collection and its errors.
//!
//! Writes are optimistic: every stored user carries a revision, and
//! [`UserRepository::update`] only succeeds when the caller saw the latest
//! one. Services re-read and retry on
//! [`UserRepositoryError::RevisionMismatch`].

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another writer updated the record first.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "user revision mismatch: expected {expected}, found {actual}",
        /// The record vanished between read and write.
        Missing { id: String } => "user {id} is not stored",
    }
}

/// A user together with the revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub user: User,
    pub revision: u32,
}

/// Revision assigned to a user on insert.
pub const INITIAL_REVISION: u32 = 1;

/// Driven port for the users collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user and its current revision.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserRepositoryError>;

    /// Store a new user at [`INITIAL_REVISION`].
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Replace a user if its stored revision equals `expected_revision`.
    ///
    /// Returns the new revision.
    async fn update(&self, user: &User, expected_revision: u32)
    -> Result<u32, UserRepositoryError>;

    /// Remove a user, returning the removed record when one existed.
    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture repository that stores nothing.
///
/// Use it in tests where user persistence is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<StoredUser>, UserRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _user: &User) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn update(
        &self,
        user: &User,
        _expected_revision: u32,
    ) -> Result<u32, UserRepositoryError> {
        Err(UserRepositoryError::missing(user.id().to_string()))
    }

    async fn delete(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
