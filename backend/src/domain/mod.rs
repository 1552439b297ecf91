//! Domain primitives, ports, and the user store service.
//!
//! Purpose: keep the user record, its invariants, and the use-case logic
//! free of HTTP and database concerns. Adapters in `inbound` and `outbound`
//! translate to and from these types.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserId: the stored record and its primary key.
//! - UserService: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_service::UserService;
