//! Team domain models.

use crate::{
    model::{
        catalog::{CatalogPlayerDto, CatalogTeamDto},
        team::TeamDto,
    },
    server::model::player::Player,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    /// Full team name, unique across the league.
    pub name: String,
    /// Short unique name used as the team key in URLs.
    pub nickname: String,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            nickname: entity.nickname,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            nickname: self.nickname,
        }
    }

    /// Path of the team's player listing, the landing page after every player write.
    pub fn players_path(&self) -> String {
        format!("/teams/{}/players/", self.nickname)
    }
}

/// Team together with its full roster, used by the catalog endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithPlayers {
    pub team: Team,
    pub players: Vec<Player>,
}

impl TeamWithPlayers {
    pub fn into_dto(self) -> CatalogTeamDto {
        CatalogTeamDto {
            id: self.team.id,
            name: self.team.name,
            nickname: self.team.nickname,
            players: self
                .players
                .into_iter()
                .map(|p| CatalogPlayerDto {
                    id: p.id,
                    name: p.name,
                    jersey_number: p.jersey_number,
                    position: p.position,
                })
                .collect(),
        }
    }
}
