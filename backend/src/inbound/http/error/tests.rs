//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[case(
    Error::invalid_request("User already exists."),
    StatusCode::BAD_REQUEST
)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(
    Error::internal("Failed to get users"),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn error_body_is_flat_envelope() {
    let response = ResponseError::error_response(&Error::internal("Failed to add user"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to add user" })
    );
}

#[rstest]
#[actix_web::test]
async fn error_response_carries_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid trace id");
    let response = TraceId::scope(trace_id, async {
        ResponseError::error_response(&Error::not_found("User not found"))
    })
    .await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, trace_id.to_string());
}

#[rstest]
#[actix_web::test]
async fn error_response_omits_trace_id_out_of_scope() {
    let response = ResponseError::error_response(&Error::not_found("User not found"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[rstest]
#[actix_web::test]
async fn json_rejections_report_missing_fields() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": MISSING_USER_FIELDS })
    );
}

#[rstest]
#[actix_web::test]
async fn path_rejections_report_not_found() {
    let req = TestRequest::default().to_http_request();
    let parse_err = "abc".parse::<i64>().expect_err("not an integer");
    let err = path_error_handler(
        PathError::Deserialize(serde::de::Error::custom(parse_err)),
        &req,
    );
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "User not found" })
    );
}
