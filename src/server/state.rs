//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection and
//! HTTP client share their pools, and the OAuth2 provider sits behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use url::Url;

/// Type alias for the OAuth2 client with authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Identity provider used for login.
pub struct OAuthProvider {
    pub client: OAuth2Client,
    /// Endpoint returning the logged-in account's email and name.
    pub userinfo_url: Url,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests, configured without redirects.
    pub http_client: reqwest::Client,

    /// Login provider, `None` when no OAuth2 credentials are configured.
    pub oauth: Option<Arc<OAuthProvider>>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth: Option<OAuthProvider>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth: oauth.map(Arc::new),
        }
    }

    /// Whether the login link should be offered.
    pub fn login_enabled(&self) -> bool {
        self.oauth.is_some()
    }
}
