use serde::{Deserialize, Serialize};

/// Coordinates and canonical naming for a resolved city.
///
/// Produced by the geocoding client and consumed immediately by the weather
/// client; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_city: String,
    /// Empty when the remote record carries no country.
    pub country: String,
}

/// Snapshot of current conditions at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
}

/// Complete, mutually-exclusive description of what the UI shows.
///
/// Exactly one variant is active at a time. The controller owns the single
/// instance and replaces it wholesale on every transition; there is no
/// partial mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Loading,
    Error { message: String },
    Result {
        city: String,
        country: String,
        temperature: f64,
        windspeed: f64,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
