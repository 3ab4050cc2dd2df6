//! In-memory profile, post and member type collections.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{DependentRepository, DependentRepositoryError};
use crate::domain::{DependentKind, DependentRecord, RecordId, UserId};

/// One insertion-ordered collection per [`DependentKind`].
#[derive(Debug, Default)]
pub struct InMemoryDependentRepository {
    collections: RwLock<HashMap<DependentKind, Vec<DependentRecord>>>,
}

impl InMemoryDependentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DependentRepository for InMemoryDependentRepository {
    async fn insert(&self, record: &DependentRecord) -> Result<(), DependentRepositoryError> {
        let mut collections = self.collections.write().await;
        let collection = collections.entry(record.kind()).or_default();
        if collection.iter().any(|existing| existing.id == record.id) {
            return Err(DependentRepositoryError::query(format!(
                "{} {} already exists",
                record.kind(),
                record.id
            )));
        }
        collection.push(record.clone());
        Ok(())
    }

    async fn list(
        &self,
        kind: DependentKind,
    ) -> Result<Vec<DependentRecord>, DependentRepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&kind).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        kind: DependentKind,
        id: &RecordId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&kind)
            .and_then(|records| records.iter().find(|record| record.id == *id))
            .cloned())
    }

    async fn find_by_user(
        &self,
        kind: DependentKind,
        user_id: &UserId,
    ) -> Result<Option<DependentRecord>, DependentRepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&kind)
            .and_then(|records| {
                records
                    .iter()
                    .find(|record| record.user_id() == Some(user_id))
            })
            .cloned())
    }

    async fn delete(
        &self,
        kind: DependentKind,
        id: &RecordId,
    ) -> Result<bool, DependentRepositoryError> {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(&kind) else {
            return Ok(false);
        };
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok(records.len() != before)
    }
}
