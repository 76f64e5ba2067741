use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state in the OAuth callback does not match the one stored in the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for a token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The identity provider reported the account email as unverified.
    #[error("Identity provider returned an unverified email address: {0}")]
    UnverifiedEmail(String),

    /// No OAuth2 client credentials are configured.
    #[error("Login is not configured")]
    LoginDisabled,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CsrfValidationFailed | Self::UnverifiedEmail(_) => StatusCode::BAD_REQUEST,
            Self::LoginDisabled => StatusCode::NOT_FOUND,
            Self::TokenExchange(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Generic message shown instead of the error text to avoid leaking provider details.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::LoginDisabled => "Login is not available.",
            Self::UnverifiedEmail(_) => "Your email address must be verified to log in.",
            _ => "There was an issue logging you in, please try again.",
        }
    }
}
