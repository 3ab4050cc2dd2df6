//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their JSON shape and are registered with utoipa by
//! name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Concurrent writers prevented the change from being applied.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing store is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: email")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c1b8e-3c59-4c4f-9a43-2f4f4f0f7a10")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Server-assigned user identifier.
    #[schema(format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    /// Users this user follows, in subscription order. May repeat and may
    /// reference users that no longer exist.
    subscribed_to_user_ids: Vec<String>,
}

/// OpenAPI schema for a stored profile.
#[derive(ToSchema)]
#[schema(as = Profile, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProfileSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: Option<String>,
    avatar: String,
    sex: String,
    /// Birth date as a Unix timestamp.
    birthday: i64,
    country: String,
    street: String,
    city: String,
    member_type_id: Option<String>,
}

/// OpenAPI schema for a stored post.
#[derive(ToSchema)]
#[schema(as = Post, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PostSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: Option<String>,
    title: String,
    content: String,
}

/// OpenAPI schema for a stored member type.
#[derive(ToSchema)]
#[schema(as = MemberType, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MemberTypeSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(format = Uuid)]
    user_id: Option<String>,
    discount: f64,
    month_posts_limit: u32,
}
