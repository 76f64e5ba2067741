//! Serializable data transfer objects shared by the JSON API and the HTML forms.

pub mod api;
pub mod catalog;
pub mod player;
pub mod team;
