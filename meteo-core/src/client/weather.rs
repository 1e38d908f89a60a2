use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::LookupError;
use crate::model::WeatherObservation;

use super::{CurrentWeatherProvider, get_json};

const ENDPOINT: &str = "weather";

/// Open-Meteo forecast client, restricted to the current-conditions snapshot.
#[derive(Debug, Clone)]
pub struct OpenMeteoWeather {
    http: Client,
    base_url: String,
}

impl OpenMeteoWeather {
    pub fn new(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.forecast_base_url.clone(),
        }
    }
}

#[async_trait]
impl CurrentWeatherProvider for OpenMeteoWeather {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, LookupError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        let parsed: ForecastResponse = get_json(
            &self.http,
            ENDPOINT,
            &url,
            &[
                ("latitude", lat.as_str()),
                ("longitude", lon.as_str()),
                ("current_weather", "true"),
            ],
        )
        .await?;

        extract_current(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
}

fn extract_current(response: ForecastResponse) -> Result<WeatherObservation, LookupError> {
    let current = response
        .current_weather
        .ok_or(LookupError::WeatherUnavailable)?;

    Ok(WeatherObservation {
        temperature_celsius: current.temperature,
        wind_speed_kmh: current.windspeed,
    })
}
