//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity rows into these types at the data layer
//! boundary; controllers convert them into DTOs or view props.

pub mod player;
pub mod team;
pub mod user;
