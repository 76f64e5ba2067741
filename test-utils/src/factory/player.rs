use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for `player` rows.
///
/// Defaults: name `"Player {n}"`, position `"Forward"`, no owning user.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    jersey_number: i32,
    name: String,
    position: String,
    user_id: Option<i32>,
}

impl<'a> PlayerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_id: i32, jersey_number: i32) -> Self {
        Self {
            db,
            team_id,
            jersey_number,
            name: format!("Player {}", next_id()),
            position: "Forward".to_string(),
            user_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(self.position),
            jersey_number: ActiveValue::Set(self.jersey_number),
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default name and position.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
    jersey_number: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id, jersey_number).build().await
}
