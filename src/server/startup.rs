use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use url::Url;

use crate::server::{
    config::{Config, OAuthConfig},
    error::{config::ConfigError, AppError},
    state::OAuthProvider,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect or to run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a session table in the same database.
///
/// Sessions expire after a week without requests.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// HTTP client for identity provider requests.
///
/// Redirects are not followed so a provider response can't point requests at
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 provider from configuration.
///
/// # Returns
/// - `Ok(Some(OAuthProvider))` - Login configured
/// - `Ok(None)` - No client credentials, login disabled
/// - `Err(AppError::ConfigErr(_))` - One of the endpoint URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<Option<OAuthProvider>, AppError> {
    let Some(oauth) = &config.oauth else {
        return Ok(None);
    };

    Ok(Some(build_oauth_provider(oauth)?))
}

/// Builds the login provider for one set of OAuth2 settings.
pub fn build_oauth_provider(oauth: &OAuthConfig) -> Result<OAuthProvider, ConfigError> {
    let client = BasicClient::new(ClientId::new(oauth.client_id.clone()))
        .set_client_secret(ClientSecret::new(oauth.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(oauth.auth_url.clone()).map_err(|e| invalid_url("OAUTH_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(oauth.token_url.clone())
                .map_err(|e| invalid_url("OAUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(oauth.redirect_url.clone())
                .map_err(|e| invalid_url("OAUTH_REDIRECT_URL", e))?,
        );

    let userinfo_url =
        Url::parse(&oauth.userinfo_url).map_err(|e| invalid_url("OAUTH_USERINFO_URL", e))?;

    Ok(OAuthProvider {
        client,
        userinfo_url,
    })
}

fn invalid_url(var: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: err.to_string(),
    }
}
