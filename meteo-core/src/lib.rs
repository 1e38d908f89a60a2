//! Core library for the `meteo` city weather lookup.
//!
//! This crate defines:
//! - The two Open-Meteo clients (geocoding search, current weather)
//! - The lookup controller and its view-state machine
//! - Shared domain models and the error taxonomy
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or
//! services that want the same two-step lookup behind a different surface.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;

pub use client::geocoding::OpenMeteoGeocoder;
pub use client::weather::OpenMeteoWeather;
pub use client::{CurrentWeatherProvider, Geocoder};
pub use config::ClientConfig;
pub use controller::{RequestToken, WeatherLookupController};
pub use error::LookupError;
pub use model::{GeoResult, ViewState, WeatherObservation};
