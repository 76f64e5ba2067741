//! Sample league data for a fresh database.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{player::CreatePlayerParams, user::UpsertUserParam},
};

const TEAMS: [(&str, &str); 31] = [
    ("Anaheim Ducks", "ducks"),
    ("Arizona Coyotes", "coyotes"),
    ("Boston Bruins", "bruins"),
    ("Buffalo Sabres", "sabres"),
    ("Calgary Flames", "flames"),
    ("Carolina Hurricanes", "hurricanes"),
    ("Chicago Blackhawks", "blackhawks"),
    ("Colorado Avalanche", "avalanche"),
    ("Columbus Blue Jackets", "bluejackets"),
    ("Dallas Stars", "stars"),
    ("Detroit Red Wings", "redwings"),
    ("Edmonton Oilers", "oilers"),
    ("Florida Panthers", "panthers"),
    ("Los Angeles Kings", "kings"),
    ("Minnesota Wild", "wild"),
    ("Montreal Canadiens", "canadiens"),
    ("Nashville Predators", "predators"),
    ("New Jersey Devils", "devils"),
    ("New York Islanders", "islanders"),
    ("New York Rangers", "rangers"),
    ("Ottawa Senators", "senators"),
    ("Philadelphia Flyers", "flyers"),
    ("Pittsburgh Penguins", "penguins"),
    ("San Jose Sharks", "sharks"),
    ("St Louis Blues", "blues"),
    ("Tampa Bay Lightning", "lightning"),
    ("Toronto Maple Leafs", "mapleleafs"),
    ("Vancouver Canucks", "canucks"),
    ("Vegas Golden Knights", "goldenknights"),
    ("Washington Capitals", "caps"),
    ("Winnipeg Jets", "jets"),
];

const USERS: [(&str, &str); 2] = [
    ("Peter Laviolette", "peter.laviolette@nhlpreds.com"),
    ("Barry Trotz", "trotzky@nyislanders.com"),
];

/// (team nickname, owner email, name, position, jersey number)
const PLAYERS: [(&str, &str, &str, &str, i32); 9] = [
    ("predators", "peter.laviolette@nhlpreds.com", "Viktor Arvidsson", "Offenceman", 33),
    ("predators", "peter.laviolette@nhlpreds.com", "Filip Forsberg", "Offenceman", 9),
    ("predators", "peter.laviolette@nhlpreds.com", "Ryan Ellis", "Defenceman", 4),
    ("predators", "peter.laviolette@nhlpreds.com", "Dan Hamhuis", "Defenceman", 5),
    ("predators", "peter.laviolette@nhlpreds.com", "Pekka Rinne", "Goaltender", 35),
    ("predators", "peter.laviolette@nhlpreds.com", "Juuse Saros", "Goaltender", 74),
    ("predators", "peter.laviolette@nhlpreds.com", "Austin Watson", "Offenceman", 51),
    ("predators", "peter.laviolette@nhlpreds.com", "Kyle Turris", "Offenceman", 8),
    ("islanders", "trotzky@nyislanders.com", "Thomas Greiss", "Goaltender", 1),
];

/// Inserts the sample users, teams and players unless teams already exist.
///
/// # Returns
/// - `Ok(true)` - Sample data inserted
/// - `Ok(false)` - Database already had teams, nothing changed
/// - `Err(AppError)` - Insert failed
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool, AppError> {
    let team_repo = TeamRepository::new(db);

    if team_repo.count().await? > 0 {
        tracing::debug!("Skipping seed, teams already present");
        return Ok(false);
    }

    let user_repo = UserRepository::new(db);
    let mut users = Vec::with_capacity(USERS.len());
    for (name, email) in USERS {
        users.push(
            user_repo
                .upsert(UpsertUserParam {
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .await?,
        );
    }

    let mut teams = Vec::with_capacity(TEAMS.len());
    for (name, nickname) in TEAMS {
        teams.push(
            team_repo
                .create(name.to_string(), nickname.to_string())
                .await?,
        );
    }

    let player_repo = PlayerRepository::new(db);
    for (nickname, email, name, position, jersey_number) in PLAYERS {
        let team = teams
            .iter()
            .find(|t| t.nickname == nickname)
            .ok_or_else(|| AppError::InternalError(format!("Seed team {} missing", nickname)))?;
        let user_id = users.iter().find(|u| u.email == email).map(|u| u.id);

        player_repo
            .create(CreatePlayerParams {
                team_id: team.id,
                user_id,
                name: name.to_string(),
                position: position.to_string(),
                jersey_number,
            })
            .await?;
    }

    tracing::info!(
        "Seeded {} users, {} teams and {} players",
        USERS.len(),
        TEAMS.len(),
        PLAYERS.len()
    );

    Ok(true)
}
