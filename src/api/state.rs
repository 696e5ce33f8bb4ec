use crate::core::AppConfig;

/// Shared server state. The proxy is stateless between requests, so
/// this only carries the configuration read at startup.
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
