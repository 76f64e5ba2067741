use crate::server::{error::AppError, service::team::TeamService};
use test_utils::{builder::TestBuilder, factory};
