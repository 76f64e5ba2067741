use axum::{extract::State, Json};

use crate::{
    model::{api::ErrorDto, catalog::CatalogDto},
    server::{error::AppError, service::team::TeamService, state::AppState},
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Full league catalog.
///
/// Every team ordered by name, each with its players ordered by jersey number.
///
/// # Returns
/// - `200 OK` - Nested catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/catalog.json",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Teams with their players", body = CatalogDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog(State(state): State<AppState>) -> Result<Json<CatalogDto>, AppError> {
    let catalog = TeamService::new(&state.db).get_catalog().await?;

    Ok(Json(CatalogDto {
        teams: catalog.into_iter().map(|t| t.into_dto()).collect(),
    }))
}
