use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::HtmlError,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    service::auth::AuthService,
    state::{AppState, OAuthProvider},
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code for token exchange.
    pub code: String,
}

/// Redirects to the identity provider's consent screen.
///
/// Responds 404 when login is not configured.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, HtmlError> {
    let provider = require_provider(&state)?;
    let auth_service = AuthService::new(&state.db, &state.http_client, provider);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes login and stores the user in the session.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, HtmlError> {
    let provider = require_provider(&state)?;
    let auth_service = AuthService::new(&state.db, &state.http_client, provider);

    validate_csrf(&session, &params.state).await?;

    let user = auth_service.callback(params.code).await?;

    session.cycle_id().await.map_err(AppError::from)?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to("/teams/"))
}

pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/teams/")
}

fn require_provider(state: &AppState) -> Result<&OAuthProvider, AppError> {
    state
        .oauth
        .as_deref()
        .ok_or(AppError::AuthErr(AuthError::LoginDisabled))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AppError::AuthErr(AuthError::CsrfValidationFailed)),
    }
}
