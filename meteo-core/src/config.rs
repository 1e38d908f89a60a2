use std::time::Duration;

use crate::error::LookupError;

pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint and transport settings for the two Open-Meteo clients.
///
/// Nothing here is persisted; Open-Meteo needs no credentials. The struct
/// exists so tests and embedders can point the clients at a different host
/// or tighten the request timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub geocoding_base_url: String,
    pub forecast_base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: GEOCODING_BASE_URL.to_string(),
            forecast_base_url: FORECAST_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build the shared HTTP client both lookups run over.
    pub fn http_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("meteo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| LookupError::Network {
                endpoint: "client setup",
                source,
            })
    }
}
