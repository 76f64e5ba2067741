//! Player domain models, parameters and jersey number rules.

use std::num::IntErrorKind;

use crate::{
    model::player::{PlayerDto, PlayerFormDto},
    server::util::sanitize,
};

/// Lowest jersey number a player may wear.
pub const JERSEY_NUMBER_MIN: i32 = 1;
/// Highest jersey number a player may wear.
pub const JERSEY_NUMBER_MAX: i32 = 99;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    /// Free-text position such as "Goaltender".
    pub position: String,
    pub jersey_number: i32,
    pub team_id: i32,
    /// User who added the player, if they were logged in.
    pub user_id: Option<i32>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            position: entity.position,
            jersey_number: entity.jersey_number,
            team_id: entity.team_id,
            user_id: entity.user_id,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            jersey_number: self.jersey_number,
            position: self.position,
            team_id: self.team_id,
        }
    }
}

/// Validated values for inserting a player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub team_id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub position: String,
    pub jersey_number: i32,
}

/// Validated values for updating a player.
///
/// `position` is `None` when the form left it blank, which keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: i32,
}

/// Raw player form values, exactly as submitted.
///
/// Nothing is validated or sanitized yet; the re-rendered form shows these values
/// back to the user when the submission is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSubmission {
    pub name: String,
    pub position: String,
    pub jersey_number: String,
}

impl PlayerSubmission {
    pub fn from_dto(dto: PlayerFormDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            jersey_number: dto.jersey_number,
        }
    }

    /// Form values pre-filled from a stored player, used by the edit page.
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            jersey_number: player.jersey_number.to_string(),
        }
    }
}

/// Why a submitted jersey number was rejected before looking at the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidJerseyNumber {
    NotAnInteger,
    OutOfRange,
}

/// Outcome of checking a submitted jersey number against a team's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JerseyNumberCheck {
    /// Well-formed, in range and free on the team.
    Valid(i32),
    /// Malformed or out of range.
    Invalid(InvalidJerseyNumber),
    /// Already worn by another player on the team.
    Taken(i32),
}

/// Parses a raw form value into a jersey number.
///
/// The value is sanitized and trimmed first. Integers too large for `i32` are
/// reported as out of range rather than as non-integers.
pub fn parse_jersey_number(raw: &str) -> Result<i32, InvalidJerseyNumber> {
    let cleaned = sanitize::clean(raw);

    let number = cleaned.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidJerseyNumber::OutOfRange,
        _ => InvalidJerseyNumber::NotAnInteger,
    })?;

    if !(JERSEY_NUMBER_MIN..=JERSEY_NUMBER_MAX).contains(&number) {
        return Err(InvalidJerseyNumber::OutOfRange);
    }

    Ok(number)
}
