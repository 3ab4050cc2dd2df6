//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users {"email":"ada@example.com","firstName":"Ada","lastName":"Lovelace"}
//! PATCH  /api/v1/users/{id} {"firstName":"Augusta"}
//! DELETE /api/v1/users/{id}
//! POST   /api/v1/users/{id}/subscribeTo {"userId":"..."}
//! POST   /api/v1/users/{id}/unsubscribeFrom {"userId":"..."}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Email, Error, NewUser, PersonName, User, UserChanges, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_user_id, require, user_field_error};

/// Request body for `POST /api/v1/users`.
///
/// Fields are optional here so a missing one is reported by name rather
/// than as a generic JSON failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `PATCH /api/v1/users/{id}`. Absent fields are left as is.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for the subscribe and unsubscribe endpoints.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    /// Target user identifier.
    #[schema(format = Uuid)]
    pub user_id: Option<String>,
}

fn parse_email(value: String) -> Result<Email, Error> {
    Email::new(value).map_err(|err| user_field_error("email", &err))
}

fn parse_name(value: String, field: &str) -> Result<PersonName, Error> {
    PersonName::new(value).map_err(|err| user_field_error(field, &err))
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            email: parse_email(require(value.email, "email")?)?,
            first_name: parse_name(require(value.first_name, "firstName")?, "firstName")?,
            last_name: parse_name(require(value.last_name, "lastName")?, "lastName")?,
        })
    }
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = Error;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            email: value.email.map(parse_email).transpose()?,
            first_name: value
                .first_name
                .map(|name| parse_name(name, "firstName"))
                .transpose()?,
            last_name: value
                .last_name
                .map(|name| parse_name(name, "lastName"))
                .transpose()?,
        })
    }
}

fn parse_target(payload: SubscriptionRequest) -> Result<UserId, Error> {
    let raw = require(payload.user_id, "userId")?;
    parse_user_id(&raw, "userId")
}

/// List every user in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, "id")?;
    let user = state.users.get_user(&id).await?;
    Ok(web::Json(user))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let user = state.users_command.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Change some of a user's contact fields.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Conflict", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, "id")?;
    let changes = UserChanges::try_from(payload.into_inner())?;
    let user = state.users_command.update_user(&id, changes).await?;
    Ok(web::Json(user))
}

/// Delete a user together with its profile, post and member type.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "Deleted user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, "id")?;
    let user = state.users_command.delete_user(&id).await?;
    Ok(web::Json(user))
}

/// Append a user to the subscription list.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/subscribeTo",
    params(("id" = String, Path, description = "Subscribing user (UUID)")),
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Conflict", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "subscribeToUser"
)]
#[post("/users/{id}/subscribeTo")]
pub async fn subscribe_to_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SubscriptionRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, "id")?;
    let target = parse_target(payload.into_inner())?;
    let user = state.users_command.subscribe_to_user(&id, target).await?;
    Ok(web::Json(user))
}

/// Remove the first occurrence of a user from the subscription list.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/unsubscribeFrom",
    params(("id" = String, Path, description = "Subscribing user (UUID)")),
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Conflict", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "unsubscribeFromUser"
)]
#[post("/users/{id}/unsubscribeFrom")]
pub async fn unsubscribe_from_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SubscriptionRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path, "id")?;
    let target = parse_target(payload.into_inner())?;
    let user = state.users_command.unsubscribe_from_user(&id, target).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
