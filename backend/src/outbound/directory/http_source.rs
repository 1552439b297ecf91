//! Reqwest-backed remote user directory.
//!
//! Owns transport details only: the GET request, timeout and status mapping,
//! and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{RemoteUserDto, into_domain_users};
use crate::domain::User;
use crate::domain::ports::{UserDirectory, UserDirectoryError};

const USER_AGENT: &str = concat!("users-service/", env!("CARGO_PKG_VERSION"));

/// Directory adapter that fetches the full user list from one endpoint.
pub struct HttpUserDirectory {
    client: Client,
    endpoint: Url,
}

impl HttpUserDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint this adapter reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        debug!(endpoint = %self.endpoint, bytes = body.len(), "fetched remote user list");
        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserDirectoryError> {
    let decoded: Vec<RemoteUserDto> = serde_json::from_slice(body).map_err(|error| {
        UserDirectoryError::decode(format!("invalid user list payload: {error}"))
    })?;
    into_domain_users(decoded).map_err(UserDirectoryError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else if error.is_decode() {
        UserDirectoryError::decode(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectoryError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(format!("status {}", status.as_u16()))
        }
        _ => UserDirectoryError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_records_and_ignores_extra_members() {
        let body = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "city": "Gwenborough" },
                "phone": "1-770-736-8031 x56442"
            },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv" }
        ]"#;

        let users = parse_users(body.as_bytes()).expect("payload decodes");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username(), "Bret");
        assert_eq!(users[1].email(), "Shanna@melissa.tv");
    }

    #[rstest]
    #[case::not_an_array(r#"{"id": 1}"#)]
    #[case::missing_email(r#"[{"id": 1, "name": "a", "username": "b"}]"#)]
    #[case::non_positive_id(r#"[{"id": 0, "name": "a", "username": "b", "email": "c"}]"#)]
    #[case::blank_name(r#"[{"id": 3, "name": " ", "username": "b", "email": "c"}]"#)]
    fn rejects_malformed_payloads(#[case] body: &str) {
        let error = parse_users(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, UserDirectoryError::Decode { .. }),
            "malformed payloads should map to Decode, got {error:?}",
        );
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        assert!(parse_users(b"[]").expect("decodes").is_empty());
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::not_found(StatusCode::NOT_FOUND, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_http_statuses(#[case] status: StatusCode, #[case] timeout: bool) {
        let error = map_status_error(status, b"upstream unavailable");
        if timeout {
            assert!(matches!(error, UserDirectoryError::Timeout { .. }));
        } else {
            assert_eq!(
                error,
                UserDirectoryError::status(status.as_u16(), "upstream unavailable")
            );
        }
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        let long = format!("line one\n\n   {}", "x".repeat(400));
        let preview = body_preview(long.as_bytes());
        assert!(preview.starts_with("line one x"));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
