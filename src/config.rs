use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    /// Recipient name used in the greeting
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QuoteConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
}

impl QuoteConfig {
    /// Returns the configured base_url, or the API Ninjas endpoint when unset.
    pub fn effective_base_url(&self) -> &str {
        if self.base_url.is_empty() {
            "https://api.api-ninjas.com/v1"
        } else {
            self.base_url.trim_end_matches('/')
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub base_url: String,
}

impl WeatherConfig {
    /// Returns the configured base_url, or the OpenWeatherMap endpoint when unset.
    pub fn effective_base_url(&self) -> &str {
        if self.base_url.is_empty() {
            "https://api.openweathermap.org/data/2.5"
        } else {
            self.base_url.trim_end_matches('/')
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CountdownConfig {
    /// Target date, `YYYY-MM-DD`
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub event: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub chat_id: String,
    #[serde(default)]
    pub api_base: String,
}

impl TelegramConfig {
    pub fn effective_api_base(&self) -> &str {
        if self.api_base.is_empty() {
            "https://api.telegram.org"
        } else {
            self.api_base.trim_end_matches('/')
        }
    }

    /// The sendMessage webhook. The token is not checked here; a bad or
    /// missing token shows up as an HTTP failure on send.
    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.effective_api_base(),
            self.bot_token
        )
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
