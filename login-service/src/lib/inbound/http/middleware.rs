use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Authenticated identity attached to a request after successful token
/// verification. Lives in the request's extensions, created here and dropped
/// with the request; it is never persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub subject: String,
    pub authorities: Vec<String>,
}

/// Per-request authentication filter, run on every inbound request.
///
/// A request without bearer credentials continues unauthenticated; whether
/// that is acceptable is decided by the route (see
/// [`require_authentication`]). A request that does present a bearer token
/// must present a valid one: any verification or lookup failure terminates
/// the request here with a 401 and never propagates further.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match bearer {
        Some(token) => token.to_owned(),
        None => return next.run(req).await,
    };

    let subject = match state.token_service.verify_and_extract_subject(&token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::warn!(error = %e, "Token verification failed");
            return unauthorized("Invalid or expired token");
        }
    };

    // Idempotent against re-entrant filtering: attach a principal only if
    // none is present yet.
    if req.extensions().get::<AuthenticatedPrincipal>().is_none() {
        let credential = match state.user_directory.find_by_username(&subject).await {
            Ok(Some(credential)) if credential.active => credential,
            Ok(_) => {
                tracing::warn!(
                    subject = %subject,
                    "Token subject no longer resolves to an active user"
                );
                return unauthorized("Invalid or expired token");
            }
            Err(e) => {
                tracing::error!(
                    subject = %subject,
                    error = %e,
                    "User directory lookup failed during authentication"
                );
                return unauthorized("Invalid or expired token");
            }
        };

        tracing::debug!(
            subject = %subject,
            authorities = ?credential.roles,
            "Authenticated principal attached"
        );

        req.extensions_mut().insert(AuthenticatedPrincipal {
            subject,
            authorities: credential.roles,
        });
    }

    next.run(req).await
}

/// Route layer for routes that require an authenticated principal.
pub async fn require_authentication(req: Request, next: Next) -> Response {
    if req.extensions().get::<AuthenticatedPrincipal>().is_none() {
        return unauthorized("Authentication required");
    }
    next.run(req).await
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}
