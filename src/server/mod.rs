//! Roster web server.
//!
//! The server is layered the same way for every request:
//!
//! - **Controller Layer** (`controller/`) - Extracts path, form and session input and
//!   turns outcomes into redirects, pages or JSON
//! - **Service Layer** (`service/`) - Jersey number and name rules, existence checks
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **View Layer** (`view/`) - Dioxus components rendered to HTML
//! - **Error Layer** (`error/`) - Application errors and their HTTP mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the current-user guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared database, HTTP client and OAuth2 provider
//! - **Startup** (`startup`) - Database, session store and client setup
//! - **Seed** (`seed`) - Sample league data for a fresh database
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! A form submission resolves its team or player, runs the roster rules in the
//! service and then either persists, flashes and redirects (303), or re-renders
//! the form with the message and the submitted values.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
