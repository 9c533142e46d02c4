use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::alerts::AlertState;
use crate::config::{AppConfig, HTTP_TIMEOUT_SECS};
use crate::history::HistoryState;
use crate::provider::ProviderClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    pub provider: ProviderClient,
    pub history: RwLock<HistoryState>,
    pub alerts: RwLock<AlertState>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        let provider = ProviderClient::new(
            http_client,
            config.provider_url.clone(),
            config.api_key.clone(),
        );
        Self {
            config,
            provider,
            history: RwLock::new(HistoryState::new()),
            alerts: RwLock::new(AlertState::new()),
        }
    }
}
