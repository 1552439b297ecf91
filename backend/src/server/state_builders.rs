//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use users_service::domain::UserService;
use users_service::inbound::http::state::HttpState;
use users_service::outbound::directory::HttpUserDirectory;
use users_service::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build the handler state: one `UserService` over the SQLite repository and
/// the HTTP directory serves both driving ports.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let repository = DieselUserRepository::new(config.db_pool.clone());
    let directory = HttpUserDirectory::new(config.directory_url.clone(), config.directory_timeout)
        .map_err(|err| std::io::Error::other(format!("failed to build HTTP client: {err}")))?;
    info!(
        endpoint = %directory.endpoint(),
        timeout_secs = config.directory_timeout.as_secs(),
        "remote user directory configured"
    );

    let service = Arc::new(UserService::new(Arc::new(repository), Arc::new(directory)));
    Ok(web::Data::new(HttpState::new(service.clone(), service)))
}
