//! Tests for users API handlers.

use super::*;
use crate::domain::ports::{ImportSummary, MockUsersCommand, MockUsersQuery};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn user(id: i64) -> User {
    User::try_new(id, "Ada Lovelace", "ada", "ada@example.com").expect("valid user")
}

fn test_app(
    query: MockUsersQuery,
    command: MockUsersCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

async fn call(
    query: MockUsersQuery,
    command: MockUsersCommand,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(query, command)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

#[actix_web::test]
async fn load_reports_imported_count() {
    let mut command = MockUsersCommand::new();
    command.expect_import_users().times(1).return_once(|| {
        Ok(ImportSummary {
            fetched: 10,
            imported: 4,
        })
    });

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::get().uri("/load"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Users loaded", "imported": 4 }));
}

#[actix_web::test]
async fn load_failure_is_static_500() {
    let mut command = MockUsersCommand::new();
    command
        .expect_import_users()
        .return_once(|| Err(Error::internal("Failed to load users")));

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::get().uri("/load"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to load users" }));
}

#[actix_web::test]
async fn list_returns_users_in_port_order() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .return_once(|| Ok(vec![user(1), user(2)]));

    let (status, body) = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/users"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[actix_web::test]
async fn get_returns_user_json() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user()
        .with(eq(UserId::new(7).expect("valid id")))
        .return_once(|_| Ok(user(7)));

    let (status, body) = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri("/users/7"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 7, "name": "Ada Lovelace", "username": "ada", "email": "ada@example.com" })
    );
}

#[rstest]
#[case("/users/abc")]
#[case("/users/0")]
#[case("/users/-3")]
#[case("/users/99999999999999999999")]
#[actix_web::test]
async fn get_with_unusable_id_is_not_found(#[case] uri: &str) {
    let mut query = MockUsersQuery::new();
    query.expect_get_user().never();

    let (status, body) = call(
        query,
        MockUsersCommand::new(),
        actix_test::TestRequest::get().uri(uri),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[actix_web::test]
async fn create_returns_201_and_stored_row() {
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .withf(|candidate| candidate.id().get() == 11)
        .return_once(Ok);

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({
                "id": 11,
                "name": "Ada Lovelace",
                "username": "ada",
                "email": "ada@example.com"
            })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("id").and_then(Value::as_i64), Some(11));
}

#[rstest]
#[case::missing_email(json!({ "id": 1, "name": "a", "username": "b" }))]
#[case::missing_id(json!({ "name": "a", "username": "b", "email": "c" }))]
#[case::blank_name(json!({ "id": 1, "name": "  ", "username": "b", "email": "c" }))]
#[case::null_username(json!({ "id": 1, "name": "a", "username": null, "email": "c" }))]
#[case::wrong_type(json!({ "id": "one", "name": "a", "username": "b", "email": "c" }))]
#[case::non_positive_id(json!({ "id": 0, "name": "a", "username": "b", "email": "c" }))]
#[case::not_an_object(json!([1, 2, 3]))]
#[actix_web::test]
async fn create_rejects_incomplete_bodies(#[case] payload: Value) {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().never();

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::put()
            .uri("/users")
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing user fields" }));
}

#[actix_web::test]
async fn create_without_json_body_is_missing_fields() {
    let (status, body) = call(
        MockUsersQuery::new(),
        MockUsersCommand::new(),
        actix_test::TestRequest::put().uri("/users"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing user fields" }));
}

#[actix_web::test]
async fn create_duplicate_is_400() {
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .return_once(|_| Err(Error::invalid_request("User already exists.")));

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({
                "id": 1,
                "name": "a",
                "username": "b",
                "email": "c"
            })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User already exists." }));
}

#[actix_web::test]
async fn delete_all_confirms() {
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_all_users()
        .times(1)
        .return_once(|| Ok(()));

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/users"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "All users deleted" }));
}

#[rstest]
#[case(Ok(()), StatusCode::OK, json!({ "message": "User deleted" }))]
#[case(
    Err(Error::not_found("User not found")),
    StatusCode::NOT_FOUND,
    json!({ "error": "User not found" })
)]
#[case(
    Err(Error::internal("Failed to delete user")),
    StatusCode::INTERNAL_SERVER_ERROR,
    json!({ "error": "Failed to delete user" })
)]
#[actix_web::test]
async fn delete_one_maps_outcomes(
    #[case] outcome: Result<(), Error>,
    #[case] expected_status: StatusCode,
    #[case] expected_body: Value,
) {
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .with(eq(UserId::new(5).expect("valid id")))
        .return_once(move |_| outcome);

    let (status, body) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/users/5"),
    )
    .await;
    assert_eq!(status, expected_status);
    assert_eq!(body, expected_body);
}

#[actix_web::test]
async fn delete_with_malformed_id_is_not_found() {
    let mut command = MockUsersCommand::new();
    command.expect_delete_user().never();

    let (status, _) = call(
        MockUsersQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/users/x1"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
