//! User domain model and parameters.

/// Roster manager who logged in through the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name reported by the identity provider.
    pub name: String,
    pub email: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// Parameters for creating a user on first login, or refreshing the name on later ones.
///
/// Users are matched by email.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub name: String,
    pub email: String,
}
