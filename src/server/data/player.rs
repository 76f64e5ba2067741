//! Player data repository.
//!
//! Holds the roster queries behind the jersey number check as well as plain CRUD.
//! Nothing here validates input; callers pass already validated parameters.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreatePlayerParams, Player, UpdatePlayerParams};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   jersey number was taken concurrently
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            position: ActiveValue::Set(params.position),
            jersey_number: ActiveValue::Set(params.jersey_number),
            team_id: ActiveValue::Set(params.team_id),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets a team's players ordered by jersey number.
    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::JerseyNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets every player in the league ordered by team and jersey number.
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::TeamId)
            .order_by_asc(entity::player::Column::JerseyNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Checks whether a jersey number is worn by any player on a team.
    ///
    /// # Arguments
    /// - `team_id` - Team whose roster is searched
    /// - `jersey_number` - Number to look for
    /// - `exclude_player_id` - Player ignored by the search, used when that player is
    ///   being edited so keeping their own number isn't a collision
    ///
    /// # Returns
    /// - `Ok(true)` - Another player on the team wears the number
    /// - `Ok(false)` - Number is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn jersey_number_taken(
        &self,
        team_id: i32,
        jersey_number: i32,
        exclude_player_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::JerseyNumber.eq(jersey_number));

        if let Some(exclude_id) = exclude_player_id {
            query = query.filter(entity::player::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Updates name, jersey number and, when given, position of a player.
    ///
    /// # Returns
    /// - `Ok(Player)` - The updated player
    /// - `Err(DbErr::RecordNotUpdated)` - No player with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, DbErr> {
        let position = match params.position {
            Some(position) => ActiveValue::Set(position),
            None => ActiveValue::NotSet,
        };

        let entity = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            position,
            jersey_number: ActiveValue::Set(params.jersey_number),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Deletes a player.
    ///
    /// # Returns
    /// - `Ok(true)` - Player deleted
    /// - `Ok(false)` - No player with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
