//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their JSON shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for the error envelope returned by every failure.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Static, human-readable failure message.
    #[schema(example = "User not found")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Caller-supplied positive identifier.
    #[schema(example = 1, minimum = 1)]
    id: i64,
    #[schema(example = "Leanne Graham")]
    name: String,
    #[schema(example = "Bret")]
    username: String,
    #[schema(example = "Sincere@april.biz")]
    email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_has_expected_name_and_field() {
        assert_eq!(ErrorSchema::name(), "ErrorResponse");
        assert!(schema_to_json::<ErrorSchema>().contains("\"error\""));
    }

    #[test]
    fn user_schema_lists_every_stored_field() {
        assert_eq!(UserSchema::name(), "User");
        let schema_json = schema_to_json::<UserSchema>();
        for field in ["id", "name", "username", "email"] {
            assert!(
                schema_json.contains(&format!("\"{field}\"")),
                "schema should contain {field}"
            );
        }
    }
}
