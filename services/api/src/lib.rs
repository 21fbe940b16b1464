//! Media catalog API service
//!
//! A single-process HTTP service exposing CRUD operations over two
//! in-memory media collections (movies and series), gated by bearer-token
//! authentication and per-route request-rate limiting.

pub mod credentials;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod rate_limiter;
pub mod routes;
pub mod state;
pub mod store;

pub use state::AppState;
