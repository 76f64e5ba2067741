use crate::server::{
    data::player::PlayerRepository,
    error::{player::PlayerError, AppError},
    model::{
        player::{CreatePlayerParams, InvalidJerseyNumber, JerseyNumberCheck, PlayerSubmission},
        team::Team,
    },
    service::player::{unique_violation_as_taken, PlayerService},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod check_jersey_number;
mod create;
mod delete;
mod get;
mod update;

fn submission(name: &str, position: &str, jersey_number: &str) -> PlayerSubmission {
    PlayerSubmission {
        name: name.to_string(),
        position: position.to_string(),
        jersey_number: jersey_number.to_string(),
    }
}

async fn player_count(db: &sea_orm::DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::Player::find().count(db).await?)
}
