use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository, error::AppError, middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the user behind the current session.
///
/// Roster pages are public, so the guard never rejects a request; it only tells
/// controllers who, if anyone, is logged in.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Gets the logged-in user.
    ///
    /// A session pointing at a user that no longer exists is treated as
    /// logged out.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session holds a known user
    /// - `Ok(None)` - Anonymous visitor or stale session
    /// - `Err(AppError)` - Session or database failure
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
