//! Roster Test Utils
//!
//! Shared helpers for the roster application's tests. Tests build an in-memory SQLite
//! database with just the tables they need, optionally attach a session backed by the
//! same pool, and fill it through factories.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_players() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_roster_tables().build().await?;
//!     let team = factory::create_team(&test.db).await?;
//!     factory::create_player(&test.db, team.id, 33).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
