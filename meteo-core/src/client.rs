use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::model::{GeoResult, WeatherObservation};

pub mod geocoding;
pub mod weather;

/// Resolves a free-text city name to coordinates plus canonical naming.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<GeoResult, LookupError>;
}

/// Fetches a current-conditions snapshot for one coordinate.
#[async_trait]
pub trait CurrentWeatherProvider: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, LookupError>;
}

/// One GET, status check, body read, schema parse. Both clients issue
/// exactly this shape of request and nothing else: no retries, no caching.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    endpoint: &'static str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, LookupError> {
    debug!(endpoint, url, ?query, "issuing lookup request");

    let res = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| LookupError::Network { endpoint, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| LookupError::Network { endpoint, source })?;

    if !status.is_success() {
        warn!(endpoint, %status, "lookup request rejected");
        return Err(LookupError::Http {
            endpoint,
            status,
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body)
        .map_err(|source| LookupError::MalformedResponse { endpoint, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
