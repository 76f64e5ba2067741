//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They resolve teams and
//! players, run the jersey number and name rules and turn missing rows into
//! `AppError::NotFound`, so controllers only deal with domain models and errors.

pub mod auth;
pub mod player;
pub mod team;
