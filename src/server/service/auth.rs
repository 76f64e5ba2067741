//! OAuth2 login against the configured identity provider.

use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuthProvider,
};

/// Subset of the OpenID Connect userinfo document used for login.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: Option<String>,
    pub email_verified: Option<bool>,
}

impl UserInfo {
    /// Converts the userinfo document into upsert parameters.
    ///
    /// Accounts whose email the provider marks as unverified are refused, since
    /// users are matched by email. A missing name falls back to the email.
    pub fn into_upsert_param(self) -> Result<UpsertUserParam, AuthError> {
        if self.email_verified == Some(false) {
            return Err(AuthError::UnverifiedEmail(self.email));
        }

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self.email.clone(),
        };

        Ok(UpsertUserParam {
            name,
            email: self.email,
        })
    }
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub provider: &'a OAuthProvider,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        provider: &'a OAuthProvider,
    ) -> Self {
        Self {
            db,
            http_client,
            provider,
        }
    }

    /// Generates the provider's consent URL with a fresh CSRF state.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.provider
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes login: exchanges the code, fetches the profile and upserts the user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AppError::AuthErr(_))` - Code exchange failed or email unverified
    /// - `Err(AppError::ReqwestErr(_))` - Userinfo request failed
    /// - `Err(AppError::DbErr(_))` - Database error during upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .provider
            .client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self.fetch_user_info(&token).await?;
        let user = UserRepository::new(self.db)
            .upsert(user_info.into_upsert_param()?)
            .await?;

        tracing::info!("User {} logged in", user.email);

        Ok(user)
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(self.provider.userinfo_url.clone())
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}
