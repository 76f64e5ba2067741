use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub jersey_number: i32,
    pub position: String,
    pub team_id: i32,
}

/// Fields submitted by the add and edit player forms.
///
/// Every field is free text as typed by the user; missing fields deserialize
/// as empty strings so the service can report them like blank input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerFormDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub jersey_number: String,
}
