//! HTTP request handlers.
//!
//! View handlers return HTML pages and report failures through `HtmlError`, which
//! renders the error page. JSON handlers return `AppError` directly, which renders
//! an `ErrorDto`.

pub mod auth;
pub mod catalog;
pub mod player;
pub mod team;


use axum::response::{Html, IntoResponse, Response};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::FlashSession},
    state::AppState,
    view::{self, PageContext},
};

/// Error type for handlers that answer with HTML.
///
/// Wraps `AppError` so the same status codes and client messages apply, but the
/// body is the rendered error page instead of JSON.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();

        let status = err.status_code();
        let page = view::error_page(
            PageContext::default(),
            status.as_u16(),
            err.client_message(),
            err.detail(),
        );

        (status, Html(page)).into_response()
    }
}

/// Builds the page header context and drains pending flash messages.
pub async fn page_context(state: &AppState, session: &Session) -> Result<PageContext, AppError> {
    let user = AuthGuard::new(&state.db, session).current_user().await?;
    let flashes = FlashSession::new(session).take().await?;

    Ok(PageContext {
        user_name: user.map(|u| u.name),
        login_enabled: state.login_enabled(),
        flashes,
    })
}
