use tracing::debug;

use crate::client::geocoding::OpenMeteoGeocoder;
use crate::client::weather::OpenMeteoWeather;
use crate::client::{CurrentWeatherProvider, Geocoder};
use crate::config::ClientConfig;
use crate::error::LookupError;
use crate::model::{GeoResult, ViewState, WeatherObservation};

/// Identifies one in-flight lookup. A completion carrying a token that is no
/// longer current is dropped, so a resubmission always wins over whatever was
/// pending when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Sequences the geocoding and weather clients and owns the single mutable
/// [`ViewState`] slot.
///
/// The lifecycle is `Idle -> Loading -> {Result | Error}`, with `Loading`
/// re-entered on every resubmission. Transitions are explicit: [`begin`]
/// enters `Loading` synchronously and issues a token, [`complete`] applies
/// an outcome if that token is still current. [`submit`] composes the two
/// around the strictly sequential pair of network calls.
///
/// [`begin`]: WeatherLookupController::begin
/// [`complete`]: WeatherLookupController::complete
/// [`submit`]: WeatherLookupController::submit
#[derive(Debug)]
pub struct WeatherLookupController {
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn CurrentWeatherProvider>,
    state: ViewState,
    seq: u64,
}

impl WeatherLookupController {
    /// Controller wired to the production Open-Meteo endpoints.
    pub fn new(config: &ClientConfig) -> Result<Self, LookupError> {
        let http = config.http_client()?;

        Ok(Self::with_clients(
            Box::new(OpenMeteoGeocoder::new(http.clone(), config)),
            Box::new(OpenMeteoWeather::new(http, config)),
        ))
    }

    /// Controller over arbitrary client implementations.
    pub fn with_clients(
        geocoder: Box<dyn Geocoder>,
        weather: Box<dyn CurrentWeatherProvider>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            state: ViewState::Idle,
            seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a lookup for `city`. Enters `Loading` immediately, before any
    /// network resolution. An empty or whitespace-only city is a no-op: no
    /// state change, no token.
    pub fn begin(&mut self, city: &str) -> Option<RequestToken> {
        if city.trim().is_empty() {
            return None;
        }

        self.seq += 1;
        self.state = ViewState::Loading;
        Some(RequestToken(self.seq))
    }

    /// Apply the outcome of the lookup identified by `token`. Stale tokens
    /// are dropped without touching the state.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<(GeoResult, WeatherObservation), LookupError>,
    ) {
        if token.0 != self.seq {
            debug!(token = token.0, current = self.seq, "dropping stale lookup completion");
            return;
        }

        self.state = match outcome {
            Ok((geo, obs)) => ViewState::Result {
                city: geo.resolved_city,
                country: geo.country,
                temperature: obs.temperature_celsius,
                windspeed: obs.wind_speed_kmh,
            },
            Err(err) => ViewState::Error {
                message: err.to_string(),
            },
        };
    }

    /// Full lookup: trim, begin, resolve the city, then (only on success)
    /// fetch its weather, complete. Returns the resulting state.
    pub async fn submit(&mut self, city: &str) -> &ViewState {
        let city = city.trim().to_string();
        let Some(token) = self.begin(&city) else {
            return &self.state;
        };

        let outcome = self.run_lookup(&city).await;
        self.complete(token, outcome);
        &self.state
    }

    /// The weather call never starts if geocoding fails.
    async fn run_lookup(
        &self,
        city: &str,
    ) -> Result<(GeoResult, WeatherObservation), LookupError> {
        let geo = self.geocoder.resolve(city).await?;
        let obs = self
            .weather
            .fetch_current(geo.latitude, geo.longitude)
            .await?;

        Ok((geo, obs))
    }
}
