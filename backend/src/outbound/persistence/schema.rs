//! Diesel table definitions for the SQLite schema.
//!
//! Must match the DDL issued by `ensure_schema` in
//! `diesel_user_repository.rs`.

diesel::table! {
    /// Stored users. `id` is caller supplied, never generated.
    users (id) {
        id -> BigInt,
        name -> Text,
        username -> Text,
        email -> Text,
    }
}
