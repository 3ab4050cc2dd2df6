//! Driving ports for profiles, posts and member types.

use async_trait::async_trait;

use crate::domain::{DependentFields, DependentKind, DependentRecord, Error, RecordId, UserId};

/// Domain use-case port for reading dependent records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependentsQuery: Send + Sync {
    /// Records of `kind`, optionally restricted to those owned by `owner`.
    async fn list_records(
        &self,
        kind: DependentKind,
        owner: Option<UserId>,
    ) -> Result<Vec<DependentRecord>, Error>;

    /// One record, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_record(&self, kind: DependentKind, id: &RecordId)
    -> Result<DependentRecord, Error>;
}

/// Domain use-case port for creating dependent records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependentsCommand: Send + Sync {
    /// Store `fields` under a freshly generated identifier.
    async fn create_record(&self, fields: DependentFields) -> Result<DependentRecord, Error>;
}
