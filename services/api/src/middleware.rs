//! Request guards: rate-limit admission and JWT authentication
//!
//! The rate-limit guard wraps every registered route and runs before the
//! auth guard, which wraps only the protected routes. A request rejected
//! by either guard never reaches its handler.

use axum::{
    body::Body,
    extract::{ConnectInfo, MatchedPath, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    jwt::AuthError,
    rate_limiter::RouteScope,
    state::AppState,
};

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

/// Rate-limit guard
///
/// Looks up the route's scope from the matched path and asks the limiter
/// for admission. Client identity is the originating network address.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    let scope = req
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| RouteScope::for_request(req.method(), path.as_str()));

    if let Some(scope) = scope {
        if !state.rate_limiter.admit(addr.ip(), scope).await {
            return Err(ApiError::RateLimited);
        }
    }

    Ok(next.run(req).await)
}

/// Authentication guard for protected routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::Missing)?;

    // Check if it's a Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Missing)?;

    // Validate the token
    let claims = state.jwt_service.validate_token(token).map_err(|e| {
        error!("Failed to validate token: {}", e);
        e
    })?;

    // Make the authenticated identity available to handlers
    req.extensions_mut().insert(AuthUser {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}
