pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use services::companion_client::CompanionClient;
use std::sync::Arc;

/// Shared application state containing the passage API client
#[derive(Clone)]
pub struct AppState {
    pub companion_client: Arc<CompanionClient>,
}

impl AppState {
    pub fn new(companion_client: Arc<CompanionClient>) -> Self {
        Self { companion_client }
    }
}
