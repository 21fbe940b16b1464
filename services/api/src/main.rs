use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::{
    config::{SeedConfig, ServerConfig},
    seed::load_collection,
};

use api::{
    AppState,
    credentials::{CredentialStore, StaticCredentials},
    jwt::{JwtConfig, JwtService},
    models::MediaDraft,
    rate_limiter::{RateLimiter, RateLimiterConfig},
    routes,
    store::MediaStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting media catalog service");

    // Seed the collections from the static data files
    let seed_config = SeedConfig::from_env()?;
    let movie_drafts: Vec<MediaDraft> = load_collection(&seed_config.movies_path())?;
    let series_drafts: Vec<MediaDraft> = load_collection(&seed_config.series_path())?;

    let movies = MediaStore::from_drafts("movies", movie_drafts)?;
    let series = MediaStore::from_drafts("series", series_drafts)?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env();
    let jwt_service = JwtService::new(jwt_config);

    let credentials: Arc<dyn CredentialStore> = Arc::new(StaticCredentials::from_env());
    let rate_limiter = RateLimiter::new(RateLimiterConfig::from_env());

    info!("Media catalog service initialized successfully");

    let app_state = AppState {
        movies,
        series,
        jwt_service,
        credentials,
        rate_limiter,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let server_config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr).await?;
    info!(
        "Media catalog service listening on {}",
        server_config.bind_addr
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
