use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use crate::domain::login::models::LoginRequest;
use crate::domain::login::models::LoginResponse;
use crate::inbound::http::router::AppState;

/// `POST /auth/login`.
///
/// Every business outcome, granted or denied, is HTTP 200 with a structured
/// body; only a syntactically malformed request body is a 400.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let username = request.username.clone();
    let response = state.auth_service.authenticate(request).await;

    if response.success {
        tracing::debug!(username = %username, "Login granted");
    } else {
        tracing::debug!(username = %username, message = %response.message, "Login denied");
    }

    Ok((StatusCode::OK, Json(response)))
}
