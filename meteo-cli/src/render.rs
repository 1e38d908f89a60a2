use meteo_core::ViewState;

/// One block of text per view-state variant, mirroring the four mutually
/// exclusive regions of the lookup UI: idle hint, loading indicator, error
/// message, result card.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Enter a city name to see the weather.".to_string(),
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Error { message } => format!("Error: {message}"),
        ViewState::Result {
            city,
            country,
            temperature,
            windspeed,
        } => format!("{city}, {country}\n{temperature}°C\nWind Speed: {windspeed} km/h"),
    }
}
