//! Team listing and the nested catalog.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::{
        player::Player,
        team::{Team, TeamWithPlayers},
    },
    util::sanitize,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Gets a team by nickname.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team found
    /// - `Err(AppError::NotFound(_))` - Unknown nickname
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn get_by_nickname(&self, nickname: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Team {} not found", sanitize::clean(nickname)))
            })
    }

    /// Builds the full catalog: every team ordered by name with its roster.
    ///
    /// Loads all players in one query and groups them by team.
    pub async fn get_catalog(&self) -> Result<Vec<TeamWithPlayers>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        let players = PlayerRepository::new(self.db).get_all().await?;

        let mut by_team: HashMap<i32, Vec<Player>> = HashMap::new();
        for player in players {
            by_team.entry(player.team_id).or_default().push(player);
        }

        let catalog = teams
            .into_iter()
            .map(|team| {
                let players = by_team.remove(&team.id).unwrap_or_default();
                TeamWithPlayers { team, players }
            })
            .collect();

        Ok(catalog)
    }
}
