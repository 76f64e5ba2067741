//! Factories for roster test data.
//!
//! Each entity has a `*Factory` builder with unique defaults plus a `create_*`
//! shorthand for the common case.
//!
//! ```rust,ignore
//! let team = factory::team::TeamFactory::new(&db)
//!     .name("Nashville Predators")
//!     .nickname("predators")
//!     .build()
//!     .await?;
//! let player = factory::create_player(&db, team.id, 33).await?;
//! ```

pub mod helpers;
pub mod player;
pub mod team;
pub mod user;

pub use helpers::create_team_with_numbers;
pub use player::create_player;
pub use team::create_team;
pub use user::create_user;
