use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::LookupError;
use crate::model::GeoResult;

use super::{Geocoder, get_json};

const ENDPOINT: &str = "geocoding";

/// Open-Meteo geocoding search client.
///
/// Requests at most one match and takes it as authoritative; there is no
/// disambiguation or ranking.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.geocoding_base_url.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, city: &str) -> Result<GeoResult, LookupError> {
        let url = format!("{}/v1/search", self.base_url);

        let parsed: SearchResponse =
            get_json(&self.http, ENDPOINT, &url, &[("name", city), ("count", "1")]).await?;

        first_match(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchRecord>>,
}

#[derive(Debug, Deserialize)]
struct SearchRecord {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

/// An absent `results` field and an empty array both mean "not found".
fn first_match(response: SearchResponse) -> Result<GeoResult, LookupError> {
    let record = response
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or(LookupError::CityNotFound)?;

    Ok(GeoResult {
        latitude: record.latitude,
        longitude: record.longitude,
        resolved_city: record.name,
        country: record.country.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SearchResponse {
        serde_json::from_str(json).expect("fixture must parse")
    }

    #[test]
    fn first_record_wins() {
        let response = parse(
            r#"{"results":[
                {"latitude":48.8566,"longitude":2.3522,"name":"Paris","country":"France"},
                {"latitude":33.6609,"longitude":-95.5555,"name":"Paris","country":"United States"}
            ]}"#,
        );

        let geo = first_match(response).expect("must resolve");
        assert_eq!(geo.resolved_city, "Paris");
        assert_eq!(geo.country, "France");
        assert_eq!(geo.latitude, 48.8566);
        assert_eq!(geo.longitude, 2.3522);
    }

    #[test]
    fn empty_results_is_not_found() {
        let err = first_match(parse(r#"{"results":[]}"#)).unwrap_err();
        assert!(matches!(err, LookupError::CityNotFound));
    }

    #[test]
    fn absent_results_is_not_found() {
        let err = first_match(parse(r#"{"generationtime_ms":0.5}"#)).unwrap_err();
        assert!(matches!(err, LookupError::CityNotFound));
    }

    #[test]
    fn missing_country_becomes_empty_string() {
        let response =
            parse(r#"{"results":[{"latitude":0.0,"longitude":0.0,"name":"Null Island"}]}"#);
        let geo = first_match(response).expect("must resolve");
        assert_eq!(geo.country, "");
    }

    #[test]
    fn wrong_shape_fails_to_parse() {
        let err = serde_json::from_str::<SearchResponse>(r#"{"results":{"nope":1}}"#);
        assert!(err.is_err());
    }
}
