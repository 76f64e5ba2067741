use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogDto, CatalogPlayerDto, CatalogTeamDto},
        player::PlayerDto,
        team::TeamDto,
    },
    server::{
        controller::{auth, catalog, player, team},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "League Roster API", description = "Read-only roster data"),
    paths(
        catalog::get_catalog,
        team::get_teams,
        team::get_team_players,
        player::get_player,
    ),
    components(schemas(
        CatalogDto,
        CatalogTeamDto,
        CatalogPlayerDto,
        TeamDto,
        PlayerDto,
        ErrorDto
    )),
    tags(
        (name = catalog::CATALOG_TAG, description = "Nested league catalog"),
        (name = team::TEAM_TAG, description = "Teams and rosters"),
        (name = player::PLAYER_TAG, description = "Players")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

/// HTML pages. Every team route is served with and without the `players/` segment.
fn page_routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(team::teams))
        .route("/teams/", get(team::teams))
        .route("/teams/{nickname}/", get(team::team_players))
        .route("/teams/{nickname}/players/", get(team::team_players));

    for prefix in ["/teams/{nickname}", "/teams/{nickname}/players"] {
        router = router
            .route(
                &format!("{}/new/", prefix),
                get(player::new_player).post(player::create_player),
            )
            .route(&format!("{}/{{id}}", prefix), get(player::player_detail))
            .route(
                &format!("{}/{{id}}/edit", prefix),
                get(player::edit_player).post(player::update_player),
            )
            .route(
                &format!("{}/{{id}}/delete/", prefix),
                get(player::confirm_delete_player).post(player::delete_player),
            );
    }

    router
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
}

/// Read-only JSON API, open to cross-origin GETs.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/catalog.json", get(catalog::get_catalog))
        .route("/api/v1/teams", get(team::get_teams))
        .route(
            "/api/v1/teams/{nickname}/players",
            get(team::get_team_players),
        )
        .route("/api/v1/players/{id}", get(player::get_player))
        .layer(cors)
}
