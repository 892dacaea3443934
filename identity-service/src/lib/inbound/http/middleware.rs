use auth::TokenError;
use auth::TokenService;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the validated token claims for protected routes
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Middleware that validates bearer tokens and adds the caller's identity to
/// request extensions.
///
/// Every validation failure is a 401; only expiry gets a distinct message so
/// clients can prompt for re-login.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    let claims = state.token_service.validate(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        let message = match e {
            TokenError::Expired => "Token has expired",
            _ => "Invalid token",
        };
        ApiError::Unauthorized(message.to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        email: claims.email,
        first_name: claims.first_name,
        last_name: claims.last_name,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Authorization header is required".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Authorization header format must be Bearer <token>".to_string(),
        )
        .into_response()
    })
}
