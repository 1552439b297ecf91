//! Remote user directory adapters.
//!
//! Thin HTTP implementation of the `UserDirectory` port used by imports.

mod dto;
mod http_source;

pub use http_source::HttpUserDirectory;
