//! Session wrappers and the login guard used by controllers.

pub mod auth;
pub mod session;
