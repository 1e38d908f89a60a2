use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a submitted city name and a rendered
/// result. All variants are flattened to their `Display` string at the
/// controller boundary; nothing is retried.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding returned an absent or empty `results` array. The two cases
    /// are deliberately not distinguished.
    #[error("City not found.")]
    CityNotFound,

    /// Weather response carried no `current_weather` payload.
    #[error("Weather data not available.")]
    WeatherUnavailable,

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Http {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// Transport-level failure: DNS, TLS, connect, or reading the body.
    #[error("Failed to reach {endpoint}: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not JSON of the declared shape.
    #[error("Malformed {endpoint} response: {source}")]
    MalformedResponse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_user_visible_text() {
        assert_eq!(LookupError::CityNotFound.to_string(), "City not found.");
    }

    #[test]
    fn unavailable_message_is_user_visible_text() {
        assert_eq!(
            LookupError::WeatherUnavailable.to_string(),
            "Weather data not available."
        );
    }

    #[test]
    fn malformed_response_names_the_endpoint() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::MalformedResponse {
            endpoint: "geocoding",
            source,
        };
        assert!(err.to_string().starts_with("Malformed geocoding response"));
    }
}
