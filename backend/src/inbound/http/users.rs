//! Users API handlers.
//!
//! ```text
//! GET    /load
//! GET    /users
//! GET    /users/{id}
//! PUT    /users        {"id":1,"name":"…","username":"…","email":"…"}
//! DELETE /users
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::user_service::USER_NOT_FOUND;
use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{MISSING_USER_FIELDS, json_error_handler, path_error_handler};
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Create request body for `PUT /users`.
///
/// Every member is optional at the wire level so that absent fields are
/// reported as `Missing user fields` rather than a decoding failure.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = 11)]
    pub id: Option<i64>,
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for User {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let missing = || Error::invalid_request(MISSING_USER_FIELDS);
        let CreateUserRequest {
            id,
            name,
            username,
            email,
        } = value;
        User::try_new(
            id.ok_or_else(missing)?,
            name.ok_or_else(missing)?,
            username.ok_or_else(missing)?,
            email.ok_or_else(missing)?,
        )
        .map_err(|_| missing())
    }
}

/// Body for successful mutations that return no record.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted")]
    pub message: String,
}

/// Body for a successful import.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ImportResponse {
    #[schema(example = "Users loaded")]
    pub message: String,
    /// Rows actually inserted; records whose id already existed are skipped.
    #[schema(example = 10)]
    pub imported: usize,
}

fn parse_user_id(raw: i64) -> ApiResult<UserId> {
    UserId::new(raw).map_err(|_| Error::not_found(USER_NOT_FOUND))
}

/// Import every user from the remote directory, skipping known ids.
#[utoipa::path(
    get,
    path = "/load",
    responses(
        (status = 200, description = "Import finished", body = ImportResponse),
        (status = 500, description = "Remote or storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "loadUsers"
)]
#[get("/load")]
pub async fn load_users(state: web::Data<HttpState>) -> ApiResult<web::Json<ImportResponse>> {
    let summary = state.commands.import_users().await?;
    Ok(web::Json(ImportResponse {
        message: "Users loaded".to_owned(),
        imported: summary.imported,
    }))
}

/// List every stored user ordered by id.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "Unknown or malformed id", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

/// Insert a new user with a caller-chosen id.
#[utoipa::path(
    put,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Missing fields or id already taken", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[put("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = User::try_from(payload.into_inner())?;
    let created = state.commands.create_user(user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Remove every stored user.
#[utoipa::path(
    delete,
    path = "/users",
    responses(
        (status = 200, description = "Table cleared", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUsers"
)]
#[delete("/users")]
pub async fn delete_users(state: web::Data<HttpState>) -> ApiResult<web::Json<MessageResponse>> {
    state.commands.delete_all_users().await?;
    Ok(web::Json(MessageResponse {
        message: "All users deleted".to_owned(),
    }))
}

/// Remove one user by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User removed", body = MessageResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_user_id(path.into_inner())?;
    state.commands.delete_user(id).await?;
    Ok(web::Json(MessageResponse {
        message: "User deleted".to_owned(),
    }))
}

/// Register the user routes and the extractor error handlers they rely on.
///
/// Expects [`HttpState`] to be registered as app data by the caller.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::inbound::http::users::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(load_users)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(delete_users)
        .service(delete_user);
}

#[cfg(test)]
mod tests;
