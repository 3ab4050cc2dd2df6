//! In-memory users collection with revision checks.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{INITIAL_REVISION, StoredUser, UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Users kept in insertion order alongside their revisions.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().map(|stored| stored.user.clone()).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|stored| stored.user.id() == id).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.iter().any(|stored| stored.user.id() == user.id()) {
            return Err(UserRepositoryError::query(format!(
                "user {} already exists",
                user.id()
            )));
        }
        users.push(StoredUser {
            user: user.clone(),
            revision: INITIAL_REVISION,
        });
        Ok(())
    }

    async fn update(
        &self,
        user: &User,
        expected_revision: u32,
    ) -> Result<u32, UserRepositoryError> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|stored| stored.user.id() == user.id())
            .ok_or_else(|| UserRepositoryError::missing(user.id().to_string()))?;
        if stored.revision != expected_revision {
            return Err(UserRepositoryError::revision_mismatch(
                expected_revision,
                stored.revision,
            ));
        }
        stored.user = user.clone();
        stored.revision = stored.revision.saturating_add(1);
        Ok(stored.revision)
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.users.write().await;
        let position = users.iter().position(|stored| stored.user.id() == id);
        Ok(position.map(|index| users.remove(index).user))
    }
}
