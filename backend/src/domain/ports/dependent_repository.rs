//! Port abstraction for the profile, post and member type collections.

use async_trait::async_trait;

use crate::domain::{DependentKind, DependentRecord, RecordId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by dependent record adapters.
    pub enum DependentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "dependent repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "dependent repository query failed: {message}",
    }
}

/// Driven port for the collections that hang off a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependentRepository: Send + Sync {
    /// Store a new record in the collection matching its kind.
    async fn insert(&self, record: &DependentRecord) -> Result<(), DependentRepositoryError>;

    /// All records of `kind` in insertion order.
    async fn list(&self, kind: DependentKind)
    -> Result<Vec<DependentRecord>, DependentRepositoryError>;

    /// Fetch one record by identifier.
    async fn find_by_id(
        &self,
        kind: DependentKind,
        id: &RecordId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError>;

    /// First record of `kind` whose `userId` equals `user_id`.
    async fn find_by_user(
        &self,
        kind: DependentKind,
        user_id: &UserId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError>;

    /// Remove a record; returns whether it existed.
    async fn delete(
        &self,
        kind: DependentKind,
        id: &RecordId,
    ) -> Result<bool, DependentRepositoryError>;
}

/// Fixture repository that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDependentRepository;

#[async_trait]
impl DependentRepository for FixtureDependentRepository {
    async fn insert(&self, _record: &DependentRecord) -> Result<(), DependentRepositoryError> {
        Ok(())
    }

    async fn list(
        &self,
        _kind: DependentKind,
    ) -> Result<Vec<DependentRecord>, DependentRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _kind: DependentKind,
        _id: &RecordId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError> {
        Ok(None)
    }

    async fn find_by_user(
        &self,
        _kind: DependentKind,
        _user_id: &UserId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError> {
        Ok(None)
    }

    async fn delete(
        &self,
        _kind: DependentKind,
        _id: &RecordId,
    ) -> Result<bool, DependentRepositoryError> {
        Ok(false)
    }
}
