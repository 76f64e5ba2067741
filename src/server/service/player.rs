//! Player business logic: jersey number validation and the create, edit and delete flows.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::{player::PlayerError, AppError},
    model::{
        player::{
            parse_jersey_number, CreatePlayerParams, JerseyNumberCheck, Player, PlayerSubmission,
            UpdatePlayerParams,
        },
        team::Team,
    },
    service::team::TeamService,
    util::sanitize,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a submitted jersey number against a team's roster.
    ///
    /// # Arguments
    /// - `raw` - Jersey number as typed into the form
    /// - `team_id` - Team the player belongs to or is being added to
    /// - `exclude_player_id` - Player being edited, whose own number doesn't collide
    ///
    /// # Returns
    /// - `Ok(JerseyNumberCheck::Valid(n))` - Number is usable
    /// - `Ok(JerseyNumberCheck::Invalid(_))` - Not an integer or outside 1..=99
    /// - `Ok(JerseyNumberCheck::Taken(n))` - Another player on the team wears it
    /// - `Err(AppError::DbErr(_))` - Roster lookup failed
    pub async fn check_jersey_number(
        &self,
        raw: &str,
        team_id: i32,
        exclude_player_id: Option<i32>,
    ) -> Result<JerseyNumberCheck, AppError> {
        let number = match parse_jersey_number(raw) {
            Ok(number) => number,
            Err(reason) => return Ok(JerseyNumberCheck::Invalid(reason)),
        };

        let taken = PlayerRepository::new(self.db)
            .jersey_number_taken(team_id, number, exclude_player_id)
            .await?;

        if taken {
            Ok(JerseyNumberCheck::Taken(number))
        } else {
            Ok(JerseyNumberCheck::Valid(number))
        }
    }

    /// Adds a player to a team.
    ///
    /// The jersey number is validated before the name, so a submission with both
    /// problems reports the number.
    ///
    /// # Arguments
    /// - `team` - Team resolved from the URL
    /// - `user_id` - Logged-in user recorded as owner, if any
    /// - `submission` - Raw form values
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(AppError::PlayerErr(_))` - Invalid or taken number, or empty name
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn create(
        &self,
        team: &Team,
        user_id: Option<i32>,
        submission: &PlayerSubmission,
    ) -> Result<Player, AppError> {
        let jersey_number = self
            .validated_jersey_number(&submission.jersey_number, team.id, None)
            .await?;
        let name = validated_name(&submission.name)?;

        let player = PlayerRepository::new(self.db)
            .create(CreatePlayerParams {
                team_id: team.id,
                user_id,
                name,
                position: sanitize::clean(&submission.position),
                jersey_number,
            })
            .await
            .map_err(|e| unique_violation_as_taken(e, jersey_number))?;

        tracing::info!(
            "Added player {} (#{}) to {}",
            player.name,
            player.jersey_number,
            team.nickname
        );

        Ok(player)
    }

    /// Edits a player in place on their current team.
    ///
    /// A blank position keeps the stored one.
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(AppError::PlayerErr(_))` - Invalid or taken number, or empty name
    /// - `Err(AppError::NotFound(_))` - Player vanished before the update
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn update(
        &self,
        player: &Player,
        submission: &PlayerSubmission,
    ) -> Result<Player, AppError> {
        let jersey_number = self
            .validated_jersey_number(&submission.jersey_number, player.team_id, Some(player.id))
            .await?;
        let name = validated_name(&submission.name)?;

        let position = sanitize::clean(&submission.position);
        let position = (!position.is_empty()).then_some(position);

        let updated = PlayerRepository::new(self.db)
            .update(UpdatePlayerParams {
                id: player.id,
                name,
                position,
                jersey_number,
            })
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => player_not_found(player.id),
                e => unique_violation_as_taken(e, jersey_number),
            })?;

        tracing::info!("Edited player {} (#{})", updated.id, updated.jersey_number);

        Ok(updated)
    }

    /// Gets a player by ID.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player found
    /// - `Err(AppError::NotFound(_))` - No player with that ID
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| player_not_found(id))
    }

    /// Gets a player together with the team they actually play for.
    ///
    /// Player URLs carry a team nickname too, but it is not trusted; links and
    /// redirects use the team returned here.
    pub async fn get_with_team(&self, id: i32) -> Result<(Player, Team), AppError> {
        let player = self.get_by_id(id).await?;

        let team = TeamRepository::new(self.db)
            .find_by_id(player.team_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Player {} references missing team {}",
                    player.id, player.team_id
                ))
            })?;

        Ok((player, team))
    }

    /// Gets a team's roster by team nickname, ordered by jersey number.
    ///
    /// # Returns
    /// - `Ok((Team, Vec<Player>))` - Team and its players
    /// - `Err(AppError::NotFound(_))` - Unknown nickname
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn get_by_team_nickname(
        &self,
        nickname: &str,
    ) -> Result<(Team, Vec<Player>), AppError> {
        let team = TeamService::new(self.db).get_by_nickname(nickname).await?;

        let players = PlayerRepository::new(self.db)
            .get_by_team_id(team.id)
            .await?;

        Ok((team, players))
    }

    /// Deletes a player.
    ///
    /// # Returns
    /// - `Ok((Player, Team))` - The deleted player and their team, for the redirect
    /// - `Err(AppError::NotFound(_))` - No player with that ID; nothing is changed
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn delete(&self, id: i32) -> Result<(Player, Team), AppError> {
        let (player, team) = self.get_with_team(id).await?;

        if !PlayerRepository::new(self.db).delete(id).await? {
            return Err(player_not_found(id));
        }

        tracing::info!("Deleted player {} from {}", player.id, team.nickname);

        Ok((player, team))
    }

    async fn validated_jersey_number(
        &self,
        raw: &str,
        team_id: i32,
        exclude_player_id: Option<i32>,
    ) -> Result<i32, AppError> {
        match self
            .check_jersey_number(raw, team_id, exclude_player_id)
            .await?
        {
            JerseyNumberCheck::Valid(number) => Ok(number),
            JerseyNumberCheck::Invalid(reason) => {
                Err(PlayerError::InvalidJerseyNumber(reason).into())
            }
            JerseyNumberCheck::Taken(number) => Err(PlayerError::JerseyNumberTaken(number).into()),
        }
    }
}

/// Sanitizes a submitted name, rejecting names that are empty once trimmed.
fn validated_name(raw: &str) -> Result<String, AppError> {
    let name = sanitize::clean(raw);

    if name.is_empty() {
        return Err(PlayerError::EmptyName.into());
    }

    Ok(name)
}

/// Maps a unique index violation on `(team_id, jersey_number)` to the same
/// error the roster check reports.
pub(super) fn unique_violation_as_taken(err: DbErr, jersey_number: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            PlayerError::JerseyNumberTaken(jersey_number).into()
        }
        _ => err.into(),
    }
}

fn player_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Player {} not found", id))
}
