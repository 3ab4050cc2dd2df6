//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Domain use-case port for changing users and their subscriptions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under a freshly generated identifier.
    async fn create_user(&self, new_user: NewUser) -> Result<User, Error>;

    /// Overwrite the fields present in `changes`.
    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<User, Error>;

    /// Delete a user together with its linked profile, post and member type.
    async fn delete_user(&self, id: &UserId) -> Result<User, Error>;

    /// Append `target` to the user's subscriptions.
    async fn subscribe_to_user(&self, id: &UserId, target: UserId) -> Result<User, Error>;

    /// Drop the first occurrence of `target` from the user's subscriptions.
    async fn unsubscribe_from_user(&self, id: &UserId, target: UserId) -> Result<User, Error>;
}
