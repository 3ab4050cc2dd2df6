//! Service backing the profile, post and member type endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    DependentRepository, DependentRepositoryError, DependentsCommand, DependentsQuery,
};
use crate::domain::{DependentFields, DependentKind, DependentRecord, Error, RecordId, UserId};

/// Dependent records service implementing the driving ports.
#[derive(Clone)]
pub struct DependentRecordsService<D> {
    records: Arc<D>,
}

impl<D> DependentRecordsService<D> {
    /// Create a new service with the given repository.
    pub fn new(records: Arc<D>) -> Self {
        Self { records }
    }
}

fn map_repository_error(error: DependentRepositoryError) -> Error {
    match error {
        DependentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("dependent repository unavailable: {message}"))
        }
        DependentRepositoryError::Query { message } => {
            Error::internal(format!("dependent repository error: {message}"))
        }
    }
}

#[async_trait]
impl<D> DependentsQuery for DependentRecordsService<D>
where
    D: DependentRepository,
{
    async fn list_records(
        &self,
        kind: DependentKind,
        owner: Option<UserId>,
    ) -> Result<Vec<DependentRecord>, Error> {
        let mut records = self
            .records
            .list(kind)
            .await
            .map_err(map_repository_error)?;
        if let Some(owner) = owner {
            records.retain(|record| record.user_id() == Some(&owner));
        }
        Ok(records)
    }

    async fn get_record(
        &self,
        kind: DependentKind,
        id: &RecordId,
    ) -> Result<DependentRecord, Error> {
        self.records
            .find_by_id(kind, id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("{kind} {id} not found")).with_details(json!({
                    "id": id.to_string(),
                    "code": "record_not_found",
                }))
            })
    }
}

#[async_trait]
impl<D> DependentsCommand for DependentRecordsService<D>
where
    D: DependentRepository,
{
    async fn create_record(&self, fields: DependentFields) -> Result<DependentRecord, Error> {
        let record = DependentRecord::new(RecordId::random(), fields);
        self.records
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        info!(kind = %record.kind(), record_id = %record.id, "dependent record created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::PostFields;
    use crate::domain::ports::MockDependentRepository;

    fn post(owner: Option<UserId>) -> DependentRecord {
        DependentRecord::new(
            RecordId::random(),
            PostFields {
                user_id: owner,
                title: "t".to_owned(),
                content: "c".to_owned(),
            },
        )
    }

    #[tokio::test]
    async fn list_filters_by_owner() {
        let owner = UserId::random();
        let mine = post(Some(owner));
        let expected = mine.id;
        let mut repo = MockDependentRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(move |_| Ok(vec![post(None), mine, post(Some(UserId::random()))]));

        let service = DependentRecordsService::new(Arc::new(repo));
        let records = service
            .list_records(DependentKind::Post, Some(owner))
            .await
            .expect("records");

        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|record| record.id), Some(expected));
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let mut repo = MockDependentRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_, _| Ok(None));

        let service = DependentRecordsService::new(Arc::new(repo));
        let error = service
            .get_record(DependentKind::Profile, &RecordId::random())
            .await
            .expect_err("missing");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message().split(' ').next(), Some("profile"));
    }

    #[tokio::test]
    async fn create_assigns_identifier_and_persists() {
        let mut repo = MockDependentRepository::new();
        repo.expect_insert()
            .withf(|record: &DependentRecord| record.kind() == DependentKind::Post)
            .times(1)
            .return_once(|_| Ok(()));

        let service = DependentRecordsService::new(Arc::new(repo));
        let fields = PostFields {
            user_id: None,
            title: "t".to_owned(),
            content: "c".to_owned(),
        };
        let record = service
            .create_record(fields.into())
            .await
            .expect("created");

        assert_eq!(record.kind(), DependentKind::Post);
    }
}
