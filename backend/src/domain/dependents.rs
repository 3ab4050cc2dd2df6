//! Records owned by a user: profiles, posts and member types.
//!
//! Each record optionally links back to one [`UserId`] through `userId`.
//! Deleting the owning user cascades to the linked record of every kind.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Identifier of a dependent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new random [`RecordId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collections whose records hang off a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependentKind {
    Profile,
    Post,
    MemberType,
}

impl DependentKind {
    /// Order in which the delete cascade visits the dependent collections.
    pub const CASCADE_ORDER: [Self; 3] = [Self::MemberType, Self::Post, Self::Profile];

    /// Stable lowercase name used in logs and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Post => "post",
            Self::MemberType => "member type",
        }
    }
}

impl fmt::Display for DependentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public profile details of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub member_type_id: Option<String>,
}

/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub title: String,
    pub content: String,
}

/// Membership tier attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTypeFields {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub discount: f64,
    pub month_posts_limit: u32,
}

/// Kind-specific payload of a dependent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependentFields {
    Profile(ProfileFields),
    Post(PostFields),
    MemberType(MemberTypeFields),
}

impl DependentFields {
    /// Collection the payload belongs to.
    #[must_use]
    pub fn kind(&self) -> DependentKind {
        match self {
            Self::Profile(_) => DependentKind::Profile,
            Self::Post(_) => DependentKind::Post,
            Self::MemberType(_) => DependentKind::MemberType,
        }
    }

    /// Owning user, if linked.
    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Profile(fields) => fields.user_id.as_ref(),
            Self::Post(fields) => fields.user_id.as_ref(),
            Self::MemberType(fields) => fields.user_id.as_ref(),
        }
    }
}

impl From<ProfileFields> for DependentFields {
    fn from(value: ProfileFields) -> Self {
        Self::Profile(value)
    }
}

impl From<PostFields> for DependentFields {
    fn from(value: PostFields) -> Self {
        Self::Post(value)
    }
}

impl From<MemberTypeFields> for DependentFields {
    fn from(value: MemberTypeFields) -> Self {
        Self::MemberType(value)
    }
}

/// A stored record from any dependent collection.
///
/// Serialises flat: `{"id": ..., "userId": ..., <kind fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: DependentFields,
}

impl DependentRecord {
    /// Build a record from its identifier and payload.
    pub fn new(id: RecordId, fields: impl Into<DependentFields>) -> Self {
        Self {
            id,
            fields: fields.into(),
        }
    }

    /// Collection the record belongs to.
    #[must_use]
    pub fn kind(&self) -> DependentKind {
        self.fields.kind()
    }

    /// Owning user, if linked.
    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.fields.user_id()
    }
}
