//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn decode(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("busy"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert_eq!(header, expected_trace_id);

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"field": "email"}));

    let payload = decode(ResponseError::error_response(&error)).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "bad");
    assert_eq!(payload.details(), Some(&json!({"field": "email"})));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::not_found("gone");

    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let payload = decode(response).await;
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn actix_errors_become_internal_errors() {
    let actix = actix_web::error::ErrorBadGateway("upstream");
    let error = Error::from(actix);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
