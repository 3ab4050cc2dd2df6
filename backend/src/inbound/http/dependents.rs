//! Profile, post and member type handlers.
//!
//! Each collection exposes create, list (optionally filtered by owner) and
//! fetch-by-id. Records link to a user through `userId`; deleting the user
//! removes them.
//!
//! ```text
//! POST /api/v1/profiles {"userId":"...","avatar":"...",...}
//! GET  /api/v1/posts?userId=...
//! GET  /api/v1/member-types/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    DependentFields, DependentKind, DependentRecord, Error, MemberTypeFields, PostFields,
    ProfileFields,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MemberTypeSchema, PostSchema, ProfileSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_optional_user_id, parse_record_id};

/// Optional owner filter for list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerFilter {
    /// Only return records linked to this user.
    pub user_id: Option<String>,
}

/// Request body for `POST /api/v1/profiles`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: Option<String>,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: Option<String>,
}

/// Request body for `POST /api/v1/posts`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
}

/// Request body for `POST /api/v1/member-types`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberTypeRequest {
    pub user_id: Option<String>,
    pub discount: f64,
    pub month_posts_limit: u32,
}

impl TryFrom<CreateProfileRequest> for DependentFields {
    type Error = Error;

    fn try_from(value: CreateProfileRequest) -> Result<Self, Self::Error> {
        Ok(ProfileFields {
            user_id: parse_optional_user_id(value.user_id.as_deref(), "userId")?,
            avatar: value.avatar,
            sex: value.sex,
            birthday: value.birthday,
            country: value.country,
            street: value.street,
            city: value.city,
            member_type_id: value.member_type_id,
        }
        .into())
    }
}

impl TryFrom<CreatePostRequest> for DependentFields {
    type Error = Error;

    fn try_from(value: CreatePostRequest) -> Result<Self, Self::Error> {
        Ok(PostFields {
            user_id: parse_optional_user_id(value.user_id.as_deref(), "userId")?,
            title: value.title,
            content: value.content,
        }
        .into())
    }
}

impl TryFrom<CreateMemberTypeRequest> for DependentFields {
    type Error = Error;

    fn try_from(value: CreateMemberTypeRequest) -> Result<Self, Self::Error> {
        Ok(MemberTypeFields {
            user_id: parse_optional_user_id(value.user_id.as_deref(), "userId")?,
            discount: value.discount,
            month_posts_limit: value.month_posts_limit,
        }
        .into())
    }
}

async fn create_record(state: &HttpState, fields: DependentFields) -> ApiResult<HttpResponse> {
    let record = state.dependents_command.create_record(fields).await?;
    Ok(HttpResponse::Created().json(record))
}

async fn list_records(
    state: &HttpState,
    kind: DependentKind,
    filter: OwnerFilter,
) -> ApiResult<web::Json<Vec<DependentRecord>>> {
    let owner = parse_optional_user_id(filter.user_id.as_deref(), "userId")?;
    let records = state.dependents.list_records(kind, owner).await?;
    Ok(web::Json(records))
}

async fn get_record(
    state: &HttpState,
    kind: DependentKind,
    raw_id: &str,
) -> ApiResult<web::Json<DependentRecord>> {
    let id = parse_record_id(raw_id, "id")?;
    let record = state.dependents.get_record(kind, &id).await?;
    Ok(web::Json(record))
}

/// Create a profile.
#[utoipa::path(
    post,
    path = "/api/v1/profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Created profile", body = ProfileSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "createProfile"
)]
#[post("/profiles")]
pub async fn create_profile(
    state: web::Data<HttpState>,
    payload: web::Json<CreateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let fields = DependentFields::try_from(payload.into_inner())?;
    create_record(&state, fields).await
}

/// List profiles.
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    params(OwnerFilter),
    responses(
        (status = 200, description = "Profiles", body = [ProfileSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "listProfiles"
)]
#[get("/profiles")]
pub async fn list_profiles(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<Vec<DependentRecord>>> {
    list_records(&state, DependentKind::Profile, filter.into_inner()).await
}

/// Fetch one profile.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    params(("id" = String, Path, description = "Profile identifier (UUID)")),
    responses(
        (status = 200, description = "Profile", body = ProfileSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "getProfile"
)]
#[get("/profiles/{id}")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DependentRecord>> {
    get_record(&state, DependentKind::Profile, &path).await
}

/// Create a post.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created post", body = PostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let fields = DependentFields::try_from(payload.into_inner())?;
    create_record(&state, fields).await
}

/// List posts.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(OwnerFilter),
    responses(
        (status = 200, description = "Posts", body = [PostSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<Vec<DependentRecord>>> {
    list_records(&state, DependentKind::Post, filter.into_inner()).await
}

/// Fetch one post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post identifier (UUID)")),
    responses(
        (status = 200, description = "Post", body = PostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DependentRecord>> {
    get_record(&state, DependentKind::Post, &path).await
}

/// Create a member type.
#[utoipa::path(
    post,
    path = "/api/v1/member-types",
    request_body = CreateMemberTypeRequest,
    responses(
        (status = 201, description = "Created member type", body = MemberTypeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["member-types"],
    operation_id = "createMemberType"
)]
#[post("/member-types")]
pub async fn create_member_type(
    state: web::Data<HttpState>,
    payload: web::Json<CreateMemberTypeRequest>,
) -> ApiResult<HttpResponse> {
    let fields = DependentFields::try_from(payload.into_inner())?;
    create_record(&state, fields).await
}

/// List member types.
#[utoipa::path(
    get,
    path = "/api/v1/member-types",
    params(OwnerFilter),
    responses(
        (status = 200, description = "Member types", body = [MemberTypeSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["member-types"],
    operation_id = "listMemberTypes"
)]
#[get("/member-types")]
pub async fn list_member_types(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<Vec<DependentRecord>>> {
    list_records(&state, DependentKind::MemberType, filter.into_inner()).await
}

/// Fetch one member type.
#[utoipa::path(
    get,
    path = "/api/v1/member-types/{id}",
    params(("id" = String, Path, description = "Member type identifier (UUID)")),
    responses(
        (status = 200, description = "Member type", body = MemberTypeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["member-types"],
    operation_id = "getMemberType"
)]
#[get("/member-types/{id}")]
pub async fn get_member_type(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DependentRecord>> {
    get_record(&state, DependentKind::MemberType, &path).await
}
