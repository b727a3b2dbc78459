//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::api::dto::user::UserDto;
use crate::api::extract::ValidatedJson;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = [UserDto])
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.user_service.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.find_by_id(id).await?;

    Ok(Json(UserDto::from(user)))
}

/// Creates a user and returns it with its assigned id.
///
/// # Endpoint
///
/// `POST /users`
///
/// The `Location` header points at the new resource (`/users/{id}`).
///
/// # Errors
///
/// Returns 422 if the body is malformed or fails validation.
/// Returns 409 if the account or card number is already registered.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserDto,
    responses(
        (status = 201, description = "User created", body = UserDto,
            headers(("Location" = String, description = "URI of the new user"))),
        (status = 409, description = "Account or card number already registered", body = ErrorBody),
        (status = 422, description = "Invalid user data", body = ErrorBody)
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserDto>), AppError> {
    let user = state.user_service.create(payload.into()).await?;
    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(user)),
    ))
}

/// Replaces every field of an existing user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// Features and news missing from the body are removed.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 422 if the body is malformed or fails validation.
/// Returns 409 if another user owns the account or card number.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "Account or card number already registered", body = ErrorBody),
        (status = 422, description = "Invalid user data", body = ErrorBody)
    )
)]
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.update(id, payload.into()).await?;

    Ok(Json(UserDto::from(user)))
}

/// Deletes a user together with its features and news.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
