//! Player pages, the add/edit/delete form flows and the player JSON endpoint.
//!
//! Every id route exists under both `/teams/{nickname}/{id}` and
//! `/teams/{nickname}/players/{id}`. The nickname is ignored once the player is
//! loaded; pages and redirects use the player's actual team.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerDto, PlayerFormDto},
    },
    server::{
        controller::{page_context, HtmlError},
        error::AppError,
        middleware::{auth::AuthGuard, session::FlashSession},
        model::{player::PlayerSubmission, team::Team},
        service::{player::PlayerService, team::TeamService},
        state::AppState,
        util::sanitize,
        view::{self, player::PlayerFormMode},
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

pub const PLAYER_ADDED: &str = "Player added.";
pub const PLAYER_EDITED: &str = "Player edited.";
pub const PLAYER_DELETED: &str = "Player deleted.";

pub async fn player_detail(
    State(state): State<AppState>,
    session: Session,
    Path((_nickname, id)): Path<(String, String)>,
) -> Result<Html<String>, HtmlError> {
    let id = parse_player_id(&id)?;
    let (player, team) = PlayerService::new(&state.db).get_with_team(id).await?;
    let ctx = page_context(&state, &session).await?;

    Ok(Html(view::player::player_page(ctx, team, player)))
}

/// Empty add-player form.
pub async fn new_player(
    State(state): State<AppState>,
    session: Session,
    Path(nickname): Path<String>,
) -> Result<Html<String>, HtmlError> {
    let team = TeamService::new(&state.db).get_by_nickname(&nickname).await?;
    let ctx = page_context(&state, &session).await?;

    Ok(Html(view::player::player_form_page(
        ctx,
        team,
        PlayerFormMode::New,
        PlayerSubmission::default(),
        None,
    )))
}

/// Adds a player to the team in the URL.
///
/// Redirects to the team's roster on success. A rejected submission re-renders
/// the form with the message and the submitted values.
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Path(nickname): Path<String>,
    Form(form): Form<PlayerFormDto>,
) -> Result<Response, HtmlError> {
    let team = TeamService::new(&state.db).get_by_nickname(&nickname).await?;
    let user = AuthGuard::new(&state.db, &session).current_user().await?;
    let submission = PlayerSubmission::from_dto(form);

    let result = PlayerService::new(&state.db)
        .create(&team, user.map(|u| u.id), &submission)
        .await;

    match result {
        Ok(_) => redirect_with_flash(&session, &team, PLAYER_ADDED).await,
        Err(AppError::PlayerErr(err)) => {
            tracing::debug!("Rejected new player for {}: {}", team.nickname, err);
            let ctx = page_context(&state, &session).await?;
            let page = view::player::player_form_page(
                ctx,
                team,
                PlayerFormMode::New,
                submission,
                Some(err.to_string()),
            );

            Ok(Html(page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Edit form pre-filled with the stored values.
pub async fn edit_player(
    State(state): State<AppState>,
    session: Session,
    Path((_nickname, id)): Path<(String, String)>,
) -> Result<Html<String>, HtmlError> {
    let id = parse_player_id(&id)?;
    let (player, team) = PlayerService::new(&state.db).get_with_team(id).await?;
    let ctx = page_context(&state, &session).await?;
    let values = PlayerSubmission::from_player(&player);

    Ok(Html(view::player::player_form_page(
        ctx,
        team,
        PlayerFormMode::Edit(player),
        values,
        None,
    )))
}

/// Updates a player on their current team.
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    Path((_nickname, id)): Path<(String, String)>,
    Form(form): Form<PlayerFormDto>,
) -> Result<Response, HtmlError> {
    let id = parse_player_id(&id)?;
    let service = PlayerService::new(&state.db);
    let (player, team) = service.get_with_team(id).await?;
    let submission = PlayerSubmission::from_dto(form);

    match service.update(&player, &submission).await {
        Ok(_) => redirect_with_flash(&session, &team, PLAYER_EDITED).await,
        Err(AppError::PlayerErr(err)) => {
            tracing::debug!("Rejected edit of player {}: {}", player.id, err);
            let ctx = page_context(&state, &session).await?;
            let page = view::player::player_form_page(
                ctx,
                team,
                PlayerFormMode::Edit(player),
                submission,
                Some(err.to_string()),
            );

            Ok(Html(page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete confirmation page.
pub async fn confirm_delete_player(
    State(state): State<AppState>,
    session: Session,
    Path((_nickname, id)): Path<(String, String)>,
) -> Result<Html<String>, HtmlError> {
    let id = parse_player_id(&id)?;
    let (player, team) = PlayerService::new(&state.db).get_with_team(id).await?;
    let ctx = page_context(&state, &session).await?;

    Ok(Html(view::player::delete_player_page(ctx, team, player)))
}

pub async fn delete_player(
    State(state): State<AppState>,
    session: Session,
    Path((_nickname, id)): Path<(String, String)>,
) -> Result<Response, HtmlError> {
    let id = parse_player_id(&id)?;
    let (_, team) = PlayerService::new(&state.db).delete(id).await?;

    redirect_with_flash(&session, &team, PLAYER_DELETED).await
}

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - Player found
/// - `404 Not Found` - Unknown player ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerDto>, AppError> {
    let id = parse_player_id(&id)?;
    let player = PlayerService::new(&state.db).get_by_id(id).await?;

    Ok(Json(player.into_dto()))
}

/// Parses a player id path segment.
///
/// Only plain digits name a player; anything else is a missing page rather than
/// a bad request.
fn parse_player_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("Player {} not found", sanitize::clean(raw))));
    }

    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Player {} not found", raw)))
}

/// Queues a flash message and redirects (303) to the team's roster.
async fn redirect_with_flash(
    session: &Session,
    team: &Team,
    message: &str,
) -> Result<Response, HtmlError> {
    FlashSession::new(session).push(message).await?;

    Ok(Redirect::to(&team.players_path()).into_response())
}
