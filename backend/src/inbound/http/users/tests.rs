//! Tests for users API handlers.

use super::*;
use crate::domain::ports::{
    MockDependentsCommand, MockDependentsQuery, MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::validation::json_config;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

const ADA_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ada() -> User {
    User::register(
        UserId::new(ADA_ID).expect("fixture id"),
        NewUser {
            email: Email::new("ada@example.com").expect("fixture email"),
            first_name: PersonName::new("Ada").expect("fixture first name"),
            last_name: PersonName::new("Lovelace").expect("fixture last name"),
        },
    )
}

fn state(query: MockUsersQuery, command: MockUsersCommand) -> HttpState {
    HttpState::new(
        Arc::new(query),
        Arc::new(command),
        Arc::new(MockDependentsQuery::new()),
        Arc::new(MockDependentsCommand::new()),
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope("/api/v1")
                .service(list_users)
                .service(get_user)
                .service(create_user)
                .service(update_user)
                .service(delete_user)
                .service(subscribe_to_user)
                .service(unsubscribe_from_user),
        )
}

async fn error_body(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("error payload")
}

#[rstest]
#[actix_web::test]
async fn list_users_returns_query_result(ada: User) {
    let mut query = MockUsersQuery::new();
    let users = vec![ada.clone()];
    query
        .expect_list_users()
        .times(1)
        .return_once(move || Ok(users));
    let app = actix_test::init_service(test_app(state(query, MockUsersCommand::new()))).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/users")
        .to_request();
    let body: Vec<User> = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, vec![ada]);
}

#[rstest]
#[actix_web::test]
async fn get_user_rejects_malformed_id() {
    let app = actix_test::init_service(test_app(state(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
    )))
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/users/not-a-uuid")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = error_body(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "id");
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[rstest]
#[actix_web::test]
async fn get_user_maps_not_found() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user()
        .withf(|id| id.to_string() == ADA_ID)
        .return_once(|_| Err(Error::not_found("user missing")));
    let app = actix_test::init_service(test_app(state(query, MockUsersCommand::new()))).await;

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/users/{ADA_ID}"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(res).await["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn create_user_returns_created(ada: User) {
    let mut command = MockUsersCommand::new();
    let created = ada.clone();
    command
        .expect_create_user()
        .withf(|new_user| AsRef::<str>::as_ref(&new_user.email) == "ada@example.com")
        .times(1)
        .return_once(move |_| Ok(created));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: User = actix_test::read_body_json(res).await;
    assert_eq!(body, ada);
}

#[rstest]
#[case(
    json!({"firstName": "Ada", "lastName": "Lovelace"}),
    "email",
    "missing_field"
)]
#[case(
    json!({"email": "ada@example.com", "lastName": "Lovelace"}),
    "firstName",
    "missing_field"
)]
#[case(
    json!({"email": "ada", "firstName": "Ada", "lastName": "Lovelace"}),
    "email",
    "invalid_email"
)]
#[case(
    json!({"email": "ada@example.com", "firstName": "  ", "lastName": "Lovelace"}),
    "firstName",
    "empty_value"
)]
#[actix_web::test]
async fn create_user_validates_fields(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(state(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
    )))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = error_body(res).await;
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn create_user_accepts_long_names(ada: User) {
    let long_name = "A".repeat(65);
    let expected = long_name.clone();
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .withf(move |new_user| AsRef::<str>::as_ref(&new_user.first_name) == expected)
        .times(1)
        .return_once(move |_| Ok(ada));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "ada@example.com",
            "firstName": long_name,
            "lastName": "Lovelace",
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_invalid_request() {
    let app = actix_test::init_service(test_app(state(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
    )))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": 42")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = error_body(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[actix_web::test]
async fn update_user_forwards_only_provided_fields(ada: User) {
    let mut command = MockUsersCommand::new();
    let updated = ada.clone();
    command
        .expect_update_user()
        .withf(|id, changes| {
            id.to_string() == ADA_ID
                && changes.email.is_none()
                && changes.last_name.is_none()
                && changes
                    .first_name
                    .as_ref()
                    .is_some_and(|name| AsRef::<str>::as_ref(name) == "Augusta")
        })
        .return_once(move |_, _| Ok(updated));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::patch()
        .uri(&format!("/api/v1/users/{ADA_ID}"))
        .set_json(json!({"firstName": "Augusta"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn delete_user_returns_deleted_user(ada: User) {
    let mut command = MockUsersCommand::new();
    let deleted = ada.clone();
    command
        .expect_delete_user()
        .times(1)
        .return_once(move |_| Ok(deleted));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{ADA_ID}"))
        .to_request();
    let body: User = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, ada);
}

#[rstest]
#[actix_web::test]
async fn subscribe_passes_target(mut ada: User) {
    let target = UserId::random();
    ada.subscribe_to(target);
    let mut command = MockUsersCommand::new();
    let subscribed = ada.clone();
    command
        .expect_subscribe_to_user()
        .withf(move |id, t| id.to_string() == ADA_ID && *t == target)
        .return_once(move |_, _| Ok(subscribed));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{ADA_ID}/subscribeTo"))
        .set_json(json!({"userId": target.to_string()}))
        .to_request();
    let body: User = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.subscribed_to_user_ids(), &[target]);
}

#[rstest]
#[case(json!({}), "missing_field")]
#[case(json!({"userId": "nope"}), "invalid_uuid")]
#[actix_web::test]
async fn unsubscribe_validates_target(#[case] payload: Value, #[case] code: &str) {
    let app = actix_test::init_service(test_app(state(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
    )))
    .await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{ADA_ID}/unsubscribeFrom"))
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = error_body(res).await;
    assert_eq!(body["details"]["field"], "userId");
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn conflicts_surface_as_409() {
    let mut command = MockUsersCommand::new();
    command
        .expect_unsubscribe_from_user()
        .return_once(|_, _| Err(Error::conflict("user kept changing")));
    let app = actix_test::init_service(test_app(state(MockUsersQuery::new(), command))).await;

    let req = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/users/{ADA_ID}/unsubscribeFrom"))
        .set_json(json!({"userId": ADA_ID}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}
