//! User aggregate service.
//!
//! Implements [`UsersQuery`] and [`UsersCommand`] on top of the users and
//! dependent collections. There is no transaction spanning collections:
//!
//! - Deleting a user looks up its linked member type, post and profile,
//!   deletes the ones that exist, then deletes the user last. A failure part
//!   way leaves orphaned dependents rather than a user whose dependents are
//!   half gone.
//! - Changes to an existing user are read-modify-write cycles guarded by the
//!   stored revision and retried on conflict, so concurrent subscribes
//!   compose instead of overwriting each other.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    DependentRepository, DependentRepositoryError, StoredUser, UserRepository,
    UserRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::{DependentKind, Error, NewUser, RecordId, User, UserChanges, UserId};

/// Default number of read-modify-write attempts before giving up.
pub const DEFAULT_MAX_WRITE_ATTEMPTS: u32 = 5;

/// Service enforcing the user aggregate's lifecycle rules.
#[derive(Clone)]
pub struct UserAggregateService<U, D> {
    users: Arc<U>,
    dependents: Arc<D>,
    max_write_attempts: u32,
}

impl<U, D> UserAggregateService<U, D> {
    /// Create a new service over the given repositories.
    pub fn new(users: Arc<U>, dependents: Arc<D>) -> Self {
        Self {
            users,
            dependents,
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        }
    }

    /// Override how many times a conflicting write is retried. Minimum 1.
    #[must_use]
    pub fn with_max_write_attempts(mut self, attempts: u32) -> Self {
        self.max_write_attempts = attempts.max(1);
        self
    }
}

impl<U, D> UserAggregateService<U, D>
where
    U: UserRepository,
    D: DependentRepository,
{
    fn user_not_found(id: &UserId) -> Error {
        Error::not_found(format!("user {id} not found")).with_details(json!({
            "id": id.to_string(),
            "code": "user_not_found",
        }))
    }

    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserRepositoryError::RevisionMismatch { expected, actual } => {
                Error::conflict("user was modified concurrently").with_details(json!({
                    "expectedRevision": expected,
                    "actualRevision": actual,
                    "code": "revision_mismatch",
                }))
            }
            UserRepositoryError::Missing { id } => Error::not_found(format!("user {id} not found"))
                .with_details(json!({ "id": id, "code": "user_not_found" })),
        }
    }

    fn map_dependent_error(error: DependentRepositoryError) -> Error {
        match error {
            DependentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("dependent repository unavailable: {message}"))
            }
            DependentRepositoryError::Query { message } => {
                Error::internal(format!("dependent repository error: {message}"))
            }
        }
    }

    async fn fetch(&self, id: &UserId) -> Result<StoredUser, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Self::user_not_found(id))
    }

    /// Apply `mutate` to the latest stored copy of the user and write it back.
    async fn modify<F>(
        &self,
        id: &UserId,
        operation: &'static str,
        mutate: F,
    ) -> Result<User, Error>
    where
        F: Fn(&mut User) + Send + Sync,
    {
        let mut last_conflict = None;
        for attempt in 1..=self.max_write_attempts {
            let StoredUser { mut user, revision } = self.fetch(id).await?;
            mutate(&mut user);
            match self.users.update(&user, revision).await {
                Ok(new_revision) => {
                    info!(user_id = %id, operation, revision = new_revision, "user updated");
                    return Ok(user);
                }
                Err(conflict @ UserRepositoryError::RevisionMismatch { .. }) => {
                    debug!(user_id = %id, operation, attempt, error = %conflict, "write conflict");
                    last_conflict = Some(conflict);
                }
                Err(err) => return Err(Self::map_user_error(err)),
            }
        }

        warn!(
            user_id = %id,
            operation,
            attempts = self.max_write_attempts,
            "giving up after repeated write conflicts"
        );
        Err(last_conflict.map_or_else(
            || Error::conflict("user was modified concurrently"),
            Self::map_user_error,
        ))
    }

    async fn linked_dependents(
        &self,
        id: &UserId,
    ) -> Result<Vec<(DependentKind, Option<RecordId>)>, Error> {
        let mut linked = Vec::with_capacity(DependentKind::CASCADE_ORDER.len());
        for kind in DependentKind::CASCADE_ORDER {
            let record = self
                .dependents
                .find_by_user(kind, id)
                .await
                .map_err(Self::map_dependent_error)?;
            linked.push((kind, record.map(|record| record.id)));
        }
        Ok(linked)
    }
}

#[async_trait]
impl<U, D> UsersQuery for UserAggregateService<U, D>
where
    U: UserRepository,
    D: DependentRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self.users.list().await.map_err(Self::map_user_error)?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, Error> {
        self.fetch(id).await.map(|stored| stored.user)
    }
}

#[async_trait]
impl<U, D> UsersCommand for UserAggregateService<U, D>
where
    U: UserRepository,
    D: DependentRepository,
{
    async fn create_user(&self, new_user: NewUser) -> Result<User, Error> {
        let user = User::register(UserId::random(), new_user);
        self.users
            .insert(&user)
            .await
            .map_err(Self::map_user_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<User, Error> {
        if changes.is_empty() {
            return self.get_user(id).await;
        }
        self.modify(id, "update", |user| user.apply(&changes)).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<User, Error> {
        self.fetch(id).await?;
        let linked = self.linked_dependents(id).await?;

        for (kind, record_id) in linked {
            let Some(record_id) = record_id else {
                debug!(user_id = %id, %kind, "no linked record to cascade");
                continue;
            };
            self.dependents
                .delete(kind, &record_id)
                .await
                .map_err(|err| {
                    error!(
                        user_id = %id,
                        %kind,
                        record_id = %record_id,
                        error = %err,
                        "cascade delete failed part way"
                    );
                    Self::map_dependent_error(err)
                })?;
            debug!(user_id = %id, %kind, record_id = %record_id, "cascaded delete");
        }

        let deleted = self
            .users
            .delete(id)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Self::user_not_found(id))?;
        info!(user_id = %id, "user deleted");
        Ok(deleted)
    }

    async fn subscribe_to_user(&self, id: &UserId, target: UserId) -> Result<User, Error> {
        self.modify(id, "subscribe", move |user| user.subscribe_to(target))
            .await
    }

    async fn unsubscribe_from_user(&self, id: &UserId, target: UserId) -> Result<User, Error> {
        self.modify(id, "unsubscribe", move |user| {
            if !user.unsubscribe_from(&target) {
                debug!(user_id = %user.id(), target = %target, "not subscribed; nothing removed");
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "user_aggregate_service_tests.rs"]
mod tests;
