//! Users service entry point: loads settings, prepares the SQLite schema,
//! and serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use users_service::inbound::http::health::HealthState;
use users_service::outbound::persistence::{DbPool, PoolConfig, ensure_schema};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let directory_url = settings.directory_url().map_err(std::io::Error::other)?;
    let directory_timeout = settings
        .directory_timeout()
        .map_err(std::io::Error::other)?;
    let pool_max_size = settings.pool_max_size().map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(settings.database_url()).with_max_size(pool_max_size))
        .await
        .map_err(std::io::Error::other)?;
    ensure_schema(&pool).await.map_err(std::io::Error::other)?;
    info!(database = settings.database_url(), "users table ready");

    let health_state = web::Data::new(HealthState::new());
    let config =
        ServerConfig::new(bind_addr, pool, directory_url).with_directory_timeout(directory_timeout);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "users service listening");
    server.await
}
