pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::time::Instant;

use crate::config::Config;
use crate::services::ViewService;

#[derive(Clone)]
pub struct AppState {
    pub view_service: ViewService,
    pub config: Config,
    pub start_time: Instant,
}
