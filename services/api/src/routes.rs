//! API service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    jwt::AuthError,
    middleware::{AuthUser, auth_middleware, rate_limit_middleware},
    models::{LoginRequest, MediaDraft, MediaOverview, MediaPatch, TokenResponse},
    state::AppState,
};

/// Number of items returned by the top-rated routes
const TOP_N: usize = 5;

/// Create the router for the API service
///
/// Every registered route passes the rate-limit guard first; everything
/// except the root and login routes then passes the auth guard.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/media", get(media_overview))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/top", get(top_movies))
        .route(
            "/movies/:index",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/series", get(list_series).post(create_series))
        .route("/series/top", get(top_series))
        .route(
            "/series/:index",
            get(get_series).put(update_series).delete(delete_series),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .merge(protected_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

/// Landing route
pub async fn home() -> &'static str {
    "Welcome to the Movie and Series API"
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for user: {}", payload.username);

    if !state.credentials.verify(&payload.username, &payload.password) {
        return Err(AuthError::InvalidCredentials.into());
    }

    let access_token = state
        .jwt_service
        .generate_access_token(&payload.username)
        .map_err(|e| {
            error!("Failed to generate access token: {}", e);
            ApiError::InternalServerError
        })?;

    let response = TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.access_token_expiry(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get all movies and series
pub async fn media_overview(State(state): State<AppState>) -> impl IntoResponse {
    Json(MediaOverview {
        movies: state.movies.list_all().await,
        series: state.series.list_all().await,
    })
}

/// Get all movies
pub async fn list_movies(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.movies.list_all().await)
}

/// Add a new movie
pub async fn create_movie(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<MediaDraft>,
) -> ApiResult<impl IntoResponse> {
    let item = state.movies.append(draft).await?;
    info!("User {} added movie \"{}\"", user.username, item.title);

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a specific movie
pub async fn get_movie(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.movies.get(index).await?))
}

/// Update a specific movie
pub async fn update_movie(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Extension(user): Extension<AuthUser>,
    Json(patch): Json<MediaPatch>,
) -> ApiResult<impl IntoResponse> {
    let item = state.movies.update(index, patch).await?;
    info!("User {} updated movie \"{}\"", user.username, item.title);

    Ok(Json(item))
}

/// Delete a specific movie
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let item = state.movies.remove(index).await?;
    info!("User {} removed movie \"{}\"", user.username, item.title);

    Ok(Json(item))
}

/// Get the top rated movies
pub async fn top_movies(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.movies.top_n(TOP_N).await)
}

/// Get all series
pub async fn list_series(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.series.list_all().await)
}

/// Add a new series
pub async fn create_series(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<MediaDraft>,
) -> ApiResult<impl IntoResponse> {
    let item = state.series.append(draft).await?;
    info!("User {} added series \"{}\"", user.username, item.title);

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a specific series
pub async fn get_series(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.series.get(index).await?))
}

/// Update a specific series
pub async fn update_series(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Extension(user): Extension<AuthUser>,
    Json(patch): Json<MediaPatch>,
) -> ApiResult<impl IntoResponse> {
    let item = state.series.update(index, patch).await?;
    info!("User {} updated series \"{}\"", user.username, item.title);

    Ok(Json(item))
}

/// Delete a specific series
pub async fn delete_series(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let item = state.series.remove(index).await?;
    info!("User {} removed series \"{}\"", user.username, item.title);

    Ok(Json(item))
}

/// Get the top rated series
pub async fn top_series(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.series.top_n(TOP_N).await)
}
