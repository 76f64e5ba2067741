//! Database repository layer.
//!
//! Repositories borrow the shared `DatabaseConnection` for the duration of a request,
//! run SeaORM queries and convert entity rows into domain models. They return
//! `DbErr` and leave mapping to application errors to the service layer.

pub mod player;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
