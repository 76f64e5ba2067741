use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// OAuth2 client settings, present only when client credentials are configured.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,

    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    /// Public base URL, used for the default OAuth2 redirect.
    pub app_url: String,
    pub bind_address: String,

    /// `None` disables login.
    pub oauth: Option<OAuthConfig>,

    /// Insert sample teams and players into an empty database at startup.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values count as unset. Login is enabled when both `OAUTH_CLIENT_ID`
    /// and `OAUTH_CLIENT_SECRET` are set; setting only one of them is an error.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(_))` - Missing or invalid variable
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let app_url = var("APP_URL")
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let bind_address =
            var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let oauth = match (var("OAUTH_CLIENT_ID"), var("OAUTH_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(OAuthConfig {
                client_id,
                client_secret,
                redirect_url: var("OAUTH_REDIRECT_URL")
                    .unwrap_or_else(|| format!("{}/auth/callback", app_url)),
                auth_url: var("OAUTH_AUTH_URL").unwrap_or_else(|| GOOGLE_AUTH_URL.to_string()),
                token_url: var("OAUTH_TOKEN_URL").unwrap_or_else(|| GOOGLE_TOKEN_URL.to_string()),
                userinfo_url: var("OAUTH_USERINFO_URL")
                    .unwrap_or_else(|| GOOGLE_USERINFO_URL.to_string()),
            }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("OAUTH_CLIENT_SECRET".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("OAUTH_CLIENT_ID".to_string()).into())
            }
            (None, None) => None,
        };

        let seed_database = match var("SEED_DATABASE") {
            None => false,
            Some(value) => parse_bool("SEED_DATABASE", &value)?,
        };

        Ok(Self {
            database_url,
            app_url,
            bind_address,
            oauth,
            seed_database,
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true or false, got {:?}", value),
        }),
    }
}
