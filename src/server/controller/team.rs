use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, player::PlayerDto, team::TeamDto},
    server::{
        controller::{page_context, HtmlError},
        error::AppError,
        service::{player::PlayerService, team::TeamService},
        state::AppState,
        view,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Teams page, served at `/` and `/teams/`.
pub async fn teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, HtmlError> {
    let teams = TeamService::new(&state.db).get_all().await?;
    let ctx = page_context(&state, &session).await?;

    Ok(Html(view::team::teams_page(ctx, teams)))
}

/// Roster page for one team, ordered by jersey number.
pub async fn team_players(
    State(state): State<AppState>,
    session: Session,
    Path(nickname): Path<String>,
) -> Result<Html<String>, HtmlError> {
    let (team, players) = PlayerService::new(&state.db)
        .get_by_team_nickname(&nickname)
        .await?;
    let ctx = page_context(&state, &session).await?;

    Ok(Html(view::team::players_page(ctx, team, players)))
}

/// List all teams.
///
/// # Returns
/// - `200 OK` - Teams ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Teams ordered by name", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamDto>>, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    Ok(Json(teams.into_iter().map(|t| t.into_dto()).collect()))
}

/// List a team's players.
///
/// # Returns
/// - `200 OK` - Players ordered by jersey number
/// - `404 Not Found` - Unknown team nickname
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/teams/{nickname}/players",
    tag = TEAM_TAG,
    params(
        ("nickname" = String, Path, description = "Team nickname")
    ),
    responses(
        (status = 200, description = "Players ordered by jersey number", body = Vec<PlayerDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> Result<Json<Vec<PlayerDto>>, AppError> {
    let (_, players) = PlayerService::new(&state.db)
        .get_by_team_nickname(&nickname)
        .await?;

    Ok(Json(players.into_iter().map(|p| p.into_dto()).collect()))
}
