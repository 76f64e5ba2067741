mod model;
mod server;

use dioxus_logger::tracing::{self, Level};
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, seed, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {:?}", e);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    if config.seed_database {
        seed::seed_if_empty(&db).await?;
    }

    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth = startup::setup_oauth_client(&config)?;

    if oauth.is_none() {
        tracing::info!("OAuth2 credentials not configured, login disabled");
    }

    let app = router::router()
        .with_state(AppState::new(db, http_client, oauth))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {} ({})", config.bind_address, config.app_url);

    axum::serve(listener, app).await?;

    Ok(())
}
