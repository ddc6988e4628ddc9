//! Users API handlers.
//!
//! ```text
//! GET /users/1
//! GET /users
//! ```
//!
//! Both endpoints are pure queries over the immutable registry; repeating
//! them any number of times changes no observable state.

use crate::domain::UserRegistry;
use actix_web::{get, web};
use service_core::{ApiError, ApiResult, Envelope, ErrorEnvelope, User};

/// Fetch a single user by identifier.
///
/// Absent identifiers answer with an explicit 404 carrying the failure
/// envelope; this service never signals absence through a 200 with an
/// empty payload.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Caller-assigned user identifier")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    registry: web::Data<UserRegistry>,
) -> ApiResult<web::Json<Envelope<User>>> {
    let id = path.into_inner();
    let user = registry
        .find(&id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(web::Json(Envelope::ok(user)))
}

/// List all users in seed order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All directory users", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(registry: web::Data<UserRegistry>) -> web::Json<Envelope<Vec<User>>> {
    web::Json(Envelope::ok(registry.list().to_vec()))
}
