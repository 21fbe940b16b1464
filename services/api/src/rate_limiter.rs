//! Per-route request rate limiting
//!
//! Every registered route declares a named scope with its own request
//! ceiling. Attempts are counted per (client address, scope) over a fixed
//! window and rejected once the ceiling is reached.

use axum::http::Method;
use std::collections::HashMap;
use std::env;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::info;

/// Requests per window for read routes
const READS_PER_WINDOW: u32 = 5;
/// Requests per window for mutating routes
const WRITES_PER_WINDOW: u32 = 3;

/// Rate limiter configuration
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Process-wide switch; when false every request is admitted
    pub enabled: bool,
    /// Length of the admission window
    pub window: Duration,
}

impl RateLimiterConfig {
    /// Create a new RateLimiterConfig from environment variables
    ///
    /// # Environment Variables
    /// - `RATE_LIMIT_ENABLED`: Set to "false" or "0" to disable limiting (default: enabled)
    /// - `RATE_LIMIT_WINDOW_SECS`: Window length in seconds (default: 60)
    pub fn from_env() -> Self {
        let enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let window_secs = env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        Self {
            enabled,
            window: Duration::from_secs(window_secs),
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window: Duration::from_secs(60),
        }
    }
}

/// A rate-limiting bucket: one route's named scope and request ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteScope {
    pub name: &'static str,
    pub ceiling: u32,
}

impl RouteScope {
    pub const fn new(name: &'static str, ceiling: u32) -> Self {
        Self { name, ceiling }
    }

    pub const ROOT: Self = Self::new("root", 10);
    pub const LOGIN: Self = Self::new("login", WRITES_PER_WINDOW);
    pub const MEDIA_OVERVIEW: Self = Self::new("media:overview", READS_PER_WINDOW);

    pub const MOVIES_LIST: Self = Self::new("movies:list", READS_PER_WINDOW);
    pub const MOVIES_CREATE: Self = Self::new("movies:create", WRITES_PER_WINDOW);
    pub const MOVIES_GET: Self = Self::new("movies:get", READS_PER_WINDOW);
    pub const MOVIES_UPDATE: Self = Self::new("movies:update", WRITES_PER_WINDOW);
    pub const MOVIES_DELETE: Self = Self::new("movies:delete", WRITES_PER_WINDOW);
    pub const MOVIES_TOP: Self = Self::new("movies:top", READS_PER_WINDOW);

    pub const SERIES_LIST: Self = Self::new("series:list", READS_PER_WINDOW);
    pub const SERIES_CREATE: Self = Self::new("series:create", WRITES_PER_WINDOW);
    pub const SERIES_GET: Self = Self::new("series:get", READS_PER_WINDOW);
    pub const SERIES_UPDATE: Self = Self::new("series:update", WRITES_PER_WINDOW);
    pub const SERIES_DELETE: Self = Self::new("series:delete", WRITES_PER_WINDOW);
    pub const SERIES_TOP: Self = Self::new("series:top", READS_PER_WINDOW);

    /// Scope table for the HTTP surface; one entry per registered route
    pub fn for_request(method: &Method, matched_path: &str) -> Option<Self> {
        let scope = match (method.as_str(), matched_path) {
            ("GET", "/") => Self::ROOT,
            ("POST", "/login") => Self::LOGIN,
            ("GET", "/media") => Self::MEDIA_OVERVIEW,

            ("GET", "/movies") => Self::MOVIES_LIST,
            ("POST", "/movies") => Self::MOVIES_CREATE,
            ("GET", "/movies/top") => Self::MOVIES_TOP,
            ("GET", "/movies/:index") => Self::MOVIES_GET,
            ("PUT", "/movies/:index") => Self::MOVIES_UPDATE,
            ("DELETE", "/movies/:index") => Self::MOVIES_DELETE,

            ("GET", "/series") => Self::SERIES_LIST,
            ("POST", "/series") => Self::SERIES_CREATE,
            ("GET", "/series/top") => Self::SERIES_TOP,
            ("GET", "/series/:index") => Self::SERIES_GET,
            ("PUT", "/series/:index") => Self::SERIES_UPDATE,
            ("DELETE", "/series/:index") => Self::SERIES_DELETE,

            _ => return None,
        };

        Some(scope)
    }
}

/// Rate limiter entry
#[derive(Debug)]
struct WindowEntry {
    /// Attempts observed in the current window
    count: u32,
    /// Start of the current window
    window_start: Instant,
}

/// Fixed-window rate limiter keyed by client address and route scope
#[derive(Clone)]
pub struct RateLimiter {
    config: RateLimiterConfig,
    entries: Arc<Mutex<HashMap<(IpAddr, &'static str), WindowEntry>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check whether a request from `client` is admitted under `scope`
    ///
    /// The window check and the increment happen under one lock
    /// acquisition, so concurrent requests cannot slip past the ceiling
    /// together.
    pub async fn admit(&self, client: IpAddr, scope: RouteScope) -> bool {
        if !self.config.enabled {
            return true;
        }

        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        let entry = entries
            .entry((client, scope.name))
            .or_insert(WindowEntry {
                count: 0,
                window_start: now,
            });

        if now.duration_since(entry.window_start) >= self.config.window {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        if entry.count > scope.ceiling {
            info!("Rate limit hit for {} on {}", client, scope.name);
            return false;
        }

        true
    }
}
