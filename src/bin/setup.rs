//! Morningbot setup wizard.
//!
//! Asks for each API key, the location, the countdown target and the
//! Telegram details on the terminal, offering the public endpoints as
//! defaults for the API base URLs, then writes `config.toml` to the
//! project root (`MORNINGBOT_ROOT`, defaulting to the current directory).

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// ── Config formatting ──────────────────────────────────────────────────────────

struct ConfigParams<'a> {
    name: &'a str,
    quote_key: &'a str,
    weather_key: &'a str,
    latitude: &'a str,
    longitude: &'a str,
    end_date: &'a str,
    event: &'a str,
    bot_token: &'a str,
    chat_id: &'a str,
    quote_url: &'a str,
    weather_url: &'a str,
    telegram_url: &'a str,
}

const DEFAULT_QUOTE_URL: &str = "https://api.api-ninjas.com/v1";
const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org";

/// Escapes a value for a basic TOML string, control characters included.
fn toml_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Produces a valid config.toml string. Extracted so it can be unit-tested.
fn format_config(p: &ConfigParams<'_>) -> String {
    let countdown_lines = if p.end_date.is_empty() {
        "# end_date = \"2030-01-01\"\n# event = \"Your event\"".to_owned()
    } else {
        format!(
            "end_date = \"{}\"\nevent = \"{}\"",
            toml_str(p.end_date),
            toml_str(p.event)
        )
    };

    let name = toml_str(p.name);
    let quote_key = toml_str(p.quote_key);
    let weather_key = toml_str(p.weather_key);
    let latitude = toml_str(p.latitude);
    let longitude = toml_str(p.longitude);
    let bot_token = toml_str(p.bot_token);
    let chat_id = toml_str(p.chat_id);
    let quote_url = toml_str(p.quote_url);
    let weather_url = toml_str(p.weather_url);
    let telegram_url = toml_str(p.telegram_url);

    format!(
        r#"[general]
name = "{name}"

[quote]
api_key = "{quote_key}"
base_url = "{quote_url}"

[weather]
api_key = "{weather_key}"
latitude = "{latitude}"
longitude = "{longitude}"
base_url = "{weather_url}"

[countdown]
{countdown_lines}

[telegram]
bot_token = "{bot_token}"
chat_id = "{chat_id}"
api_base = "{telegram_url}"
"#
    )
}

// ── Prompting ──────────────────────────────────────────────────────────────────

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_owned())
}

fn or_default(s: String, default: &str) -> String {
    if s.is_empty() {
        default.to_owned()
    } else {
        s
    }
}

fn run_cli(project_root: &Path) -> Result<()> {
    println!("=== Morningbot Setup ===\n");

    let name = read_line("Your name (used in the greeting): ")?;
    let quote_key = read_line("API Ninjas key: ")?;
    let weather_key = read_line("OpenWeatherMap key: ")?;
    let latitude = read_line("Latitude: ")?;
    let longitude = read_line("Longitude: ")?;
    let end_date = read_line("Countdown date, YYYY-MM-DD (optional): ")?;
    let event = if end_date.is_empty() {
        String::new()
    } else {
        read_line("Event name: ")?
    };
    let bot_token = read_line("Telegram bot token: ")?;
    let chat_id = read_line("Telegram chat ID: ")?;
    let quote_url = or_default(
        read_line(&format!("Quote API base URL [{DEFAULT_QUOTE_URL}]: "))?,
        DEFAULT_QUOTE_URL,
    );
    let weather_url = or_default(
        read_line(&format!("Weather API base URL [{DEFAULT_WEATHER_URL}]: "))?,
        DEFAULT_WEATHER_URL,
    );
    let telegram_url = or_default(
        read_line(&format!("Telegram API base URL [{DEFAULT_TELEGRAM_URL}]: "))?,
        DEFAULT_TELEGRAM_URL,
    );

    let config = format_config(&ConfigParams {
        name: &name,
        quote_key: &quote_key,
        weather_key: &weather_key,
        latitude: &latitude,
        longitude: &longitude,
        end_date: &end_date,
        event: &event,
        bot_token: &bot_token,
        chat_id: &chat_id,
        quote_url: &quote_url,
        weather_url: &weather_url,
        telegram_url: &telegram_url,
    });

    let config_path = project_root.join("config.toml");
    std::fs::write(&config_path, &config)
        .with_context(|| format!("Could not write {}", config_path.display()))?;

    println!("\n✓  config.toml saved to {}", config_path.display());
    println!("   Run the job with:  cargo run --bin morningbot");
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let project_root =
        PathBuf::from(std::env::var("MORNINGBOT_ROOT").unwrap_or_else(|_| ".".to_string()));
    run_cli(&project_root)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
