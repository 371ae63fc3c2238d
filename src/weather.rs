use serde::Deserialize;
use tracing::debug;

use crate::config::WeatherConfig;
use crate::error::{http_error, FetchError};

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_f: f64,
    pub description: String,
}

/// Rewrites a few OpenWeatherMap phrases so they read well after "with".
/// Exact, case-sensitive matches only.
pub fn normalize_description(description: &str) -> &str {
    match description {
        "clear sky" => "clear skies 🌞",
        "shower rain" => "rain showers",
        "thunderstorm" => "thunderstorms",
        other => other,
    }
}

/// One decimal place, using the std float formatter (correctly rounded from
/// the stored binary value, exact ties to even).
pub fn format_report(report: &WeatherReport) -> String {
    format!(
        "Today is {:.1}°F with {}.",
        report.temperature_f,
        normalize_description(&report.description)
    )
}

/// Client for the OpenWeatherMap current weather endpoint
pub struct WeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(client: reqwest::Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch_report(&self) -> Result<WeatherReport, FetchError> {
        if self.config.api_key.is_empty() {
            return Err(FetchError::Config(
                "weather API key not configured".to_string(),
            ));
        }

        let url = format!("{}/weather", self.config.effective_base_url());
        debug!(
            lat = %self.config.latitude,
            lon = %self.config.longitude,
            "Requesting weather: {}",
            url
        );

        // The key travels as a query parameter, not a header.
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", self.config.latitude.as_str()),
                ("lon", self.config.longitude.as_str()),
                ("units", "imperial"),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let body = response.text().await?;
        let data: CurrentWeatherResponse = serde_json::from_str(&body)?;

        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::EmptyResult("no weather data available".to_string()))?;

        Ok(WeatherReport {
            temperature_f: data.main.temp,
            description: condition.description,
        })
    }

    /// Fetches current conditions and renders the weather sentence.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let report = self.fetch_report().await?;
        Ok(format_report(&report))
    }
}
