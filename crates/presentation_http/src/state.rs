//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherChatService;
use infrastructure::AppConfig;

/// Shared application state
///
/// Built once at startup; the outbound clients inside the service are
/// shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Weather lookups and narrative composition
    pub weather_chat: Arc<WeatherChatService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather_chat", &self.weather_chat)
            .finish_non_exhaustive()
    }
}
