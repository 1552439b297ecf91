//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub commands: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```ignore
    /// let service = Arc::new(UserService::new(repository, directory));
    /// let state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>, commands: Arc<dyn UsersCommand>) -> Self {
        Self { users, commands }
    }
}
