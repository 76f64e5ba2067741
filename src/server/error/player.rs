use axum::http::StatusCode;
use thiserror::Error;

use crate::server::model::player::{InvalidJerseyNumber, JERSEY_NUMBER_MAX, JERSEY_NUMBER_MIN};

/// Reasons a player form submission is rejected.
///
/// The display text is shown to the user above the re-rendered form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Jersey number is not an integer or is outside the allowed range.
    #[error(
        "Jersey number must be an integer between {min} and {max}.",
        min = JERSEY_NUMBER_MIN,
        max = JERSEY_NUMBER_MAX
    )]
    InvalidJerseyNumber(InvalidJerseyNumber),

    /// Another player on the same team already wears this number.
    #[error("Jersey number {0} is already taken! Please try a different one.")]
    JerseyNumberTaken(i32),

    /// Name is empty after sanitizing.
    #[error("Player name can not be empty! Please name this person.")]
    EmptyName,
}

impl PlayerError {
    /// 400 for malformed input, 409 for a jersey number collision.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJerseyNumber(_) | Self::EmptyName => StatusCode::BAD_REQUEST,
            Self::JerseyNumberTaken(_) => StatusCode::CONFLICT,
        }
    }
}
