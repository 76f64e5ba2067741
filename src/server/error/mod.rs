//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and controllers. Each
//! variant maps to a status code and a client-facing message; store and other
//! internal failures are logged and reported with a generic message so details
//! only leak in development builds.

pub mod auth;
pub mod config;
pub mod player;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, player::PlayerError},
};

/// Message shown to clients when the database cannot serve a request.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Houston, we have a DB problem...";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login flow error.
    ///
    /// Status code is chosen by `AuthError::status_code`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected player form submission.
    ///
    /// Form controllers intercept this variant and re-render the form with the
    /// message inline; it only becomes a response on its own for non-form callers.
    #[error(transparent)]
    PlayerErr(#[from] PlayerError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 with the store-unavailable message.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client error while talking to the identity provider.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Listener or server I/O error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced team or player does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with a message that is logged but not returned.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthErr(err) => err.status_code(),
            Self::PlayerErr(err) => err.status_code(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to the client.
    pub fn client_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::PlayerErr(err) => err.to_string(),
            Self::AuthErr(err) => err.client_message().to_string(),
            Self::DbErr(_) | Self::SqlxErr(_) => STORE_UNAVAILABLE_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Full error text for server errors in development builds, `None` otherwise.
    pub fn detail(&self) -> Option<String> {
        if cfg!(debug_assertions) && self.status_code().is_server_error() {
            Some(self.to_string())
        } else {
            None
        }
    }

    /// Logs server errors; client errors are expected traffic and only traced.
    pub fn log(&self) {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
    }
}

/// Converts application errors into JSON error responses.
///
/// # Returns
/// - 400 Bad Request - Invalid jersey number or empty player name
/// - 404 Not Found - Unknown team or player, or login not configured
/// - 409 Conflict - Jersey number already taken
/// - 500 Internal Server Error - Store, session and other internal failures
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = ErrorDto {
            error: self.client_message(),
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}
