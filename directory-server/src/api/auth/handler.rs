//! Login Handler

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use shared::models::{LoginRequest, LoginResponse};

use crate::api::JsonBody;
use crate::core::ServerState;
use crate::utils::AppError;

/// Login failure, answered as `{ "success": false, "error": ... }`
#[derive(Debug)]
pub struct LoginError(pub AppError);

impl From<AppError> for LoginError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        (
            self.0.http_status(),
            Json(LoginResponse::failure(self.0.message)),
        )
            .into_response()
    }
}

/// Check a username/password pair against the credential set
///
/// Empty strings count as missing here.
pub async fn login(
    State(state): State<ServerState>,
    body: Result<JsonBody<LoginRequest>, AppError>,
) -> Result<Json<LoginResponse>, LoginError> {
    let JsonBody(req) = body?;

    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::validation("Username and password are required").into());
        }
    };

    match state.credentials.authenticate(&username, &password) {
        Some(credential) => {
            tracing::info!(target: "security", username = %credential.username, "Login succeeded");
            Ok(Json(LoginResponse::success(credential.username.clone())))
        }
        None => {
            tracing::warn!(target: "security", username = %username, "Login failed");
            Err(AppError::invalid_credentials().into())
        }
    }
}
