//! Application state shared across handlers

use std::sync::Arc;

use crate::{
    credentials::CredentialStore, jwt::JwtService, rate_limiter::RateLimiter, store::MediaStore,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub movies: MediaStore,
    pub series: MediaStore,
    pub jwt_service: JwtService,
    pub credentials: Arc<dyn CredentialStore>,
    pub rate_limiter: RateLimiter,
}
