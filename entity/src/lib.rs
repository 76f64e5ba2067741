//! SeaORM entity models for the league roster database.

pub mod prelude;

pub mod player;
pub mod team;
pub mod user;
