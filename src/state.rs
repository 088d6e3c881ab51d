use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, LlmConfig};
use crate::store::ContextStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub contexts: Arc<ContextStore>,
    pub http_client: reqwest::Client,
    pub llm: Arc<LlmConfig>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            contexts: Arc::new(ContextStore::new()),
            http_client,
            llm: Arc::new(config.llm),
        })
    }
}
