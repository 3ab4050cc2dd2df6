//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every endpoint from the inbound HTTP layer and the
//! schema wrappers in [`crate::inbound::http::schemas`]. Swagger UI serves it
//! in debug builds and `cargo run --bin openapi-dump` exports it.

use utoipa::OpenApi;

use crate::inbound::http::dependents::{
    CreateMemberTypeRequest, CreatePostRequest, CreateProfileRequest,
};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MemberTypeSchema, PostSchema, ProfileSchema, UserSchema,
};
use crate::inbound::http::users::{CreateUserRequest, SubscriptionRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userbase API",
        description = "Users with cascading profiles, posts and member types, \
                       plus subscriptions between users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::subscribe_to_user,
        crate::inbound::http::users::unsubscribe_from_user,
        crate::inbound::http::dependents::create_profile,
        crate::inbound::http::dependents::list_profiles,
        crate::inbound::http::dependents::get_profile,
        crate::inbound::http::dependents::create_post,
        crate::inbound::http::dependents::list_posts,
        crate::inbound::http::dependents::get_post,
        crate::inbound::http::dependents::create_member_type,
        crate::inbound::http::dependents::list_member_types,
        crate::inbound::http::dependents::get_member_type,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ProfileSchema,
        PostSchema,
        MemberTypeSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        SubscriptionRequest,
        CreateProfileRequest,
        CreatePostRequest,
        CreateMemberTypeRequest,
    )),
    tags(
        (name = "users", description = "User lifecycle and subscriptions"),
        (name = "profiles", description = "User profiles"),
        (name = "posts", description = "Posts authored by users"),
        (name = "member-types", description = "Membership tiers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn user_schema_is_registered_with_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user = schemas.get("User").expect("User schema");

        for field in ["id", "email", "firstName", "lastName", "subscribedToUserIds"] {
            assert_object_schema_has_field(user, field);
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }

    #[test]
    fn every_user_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/users/{id}/subscribeTo",
            "/api/v1/users/{id}/unsubscribeFrom",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
