use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Player entry embedded in a catalog team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogPlayerDto {
    pub id: i32,
    pub name: String,
    pub jersey_number: i32,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogTeamDto {
    pub id: i32,
    pub name: String,
    pub nickname: String,
    pub players: Vec<CatalogPlayerDto>,
}

/// Every team with its roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogDto {
    pub teams: Vec<CatalogTeamDto>,
}
