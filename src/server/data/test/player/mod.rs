use crate::server::{
    data::player::PlayerRepository,
    model::player::{CreatePlayerParams, UpdatePlayerParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_team_id;
mod jersey_number_taken;
