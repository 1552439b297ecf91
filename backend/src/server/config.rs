//! Server settings and the configuration object handed to `create_server`.
//!
//! Settings are layered by OrthoConfig from CLI flags, `USERS_*` environment
//! variables, and an optional configuration file. Every field has a default,
//! so the service starts with no configuration at all. Malformed values are rejected before start-up.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use users_service::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_URL: &str = "users.db";
const DEFAULT_POOL_MAX_SIZE: u32 = 4;
const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 10;

/// Invalid setting values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid directory URL {value:?}: {source}")]
    DirectoryUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Raw settings as loaded from CLI, environment, and file layers.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Path of the SQLite database file.
    #[ortho_config(default = DEFAULT_DATABASE_URL.to_owned())]
    pub database_url: String,
    /// Maximum number of pooled SQLite connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Endpoint of the remote user directory.
    #[ortho_config(default = DEFAULT_DIRECTORY_URL.to_owned())]
    pub directory_url: String,
    /// Timeout in seconds for remote directory requests.
    #[ortho_config(default = DEFAULT_DIRECTORY_TIMEOUT_SECS)]
    pub directory_timeout_secs: u64,
}

impl ServerSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::BindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// SQLite database path.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Pool size, at least one.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::Zero {
                name: "pool_max_size",
            }),
            size => Ok(size),
        }
    }

    /// Parsed remote directory endpoint.
    pub fn directory_url(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.directory_url).map_err(|source| SettingsError::DirectoryUrl {
            value: self.directory_url.clone(),
            source,
        })
    }

    /// Remote directory request timeout.
    pub fn directory_timeout(&self) -> Result<Duration, SettingsError> {
        match self.directory_timeout_secs {
            0 => Err(SettingsError::Zero {
                name: "directory_timeout_secs",
            }),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) directory_url: Url,
    pub(crate) directory_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from a bound address and a ready pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, directory_url: Url) -> Self {
        Self {
            bind_addr,
            db_pool,
            directory_url,
            directory_timeout: Duration::from_secs(DEFAULT_DIRECTORY_TIMEOUT_SECS),
        }
    }

    /// Override the remote directory request timeout.
    #[must_use]
    pub fn with_directory_timeout(mut self, timeout: Duration) -> Self {
        self.directory_timeout = timeout;
        self
    }
}
