use tracing::{debug, error, info};

use crate::compose::MessageComposer;
use crate::config::Config;
use crate::date;
use crate::error::FetchError;
use crate::platform::telegram::TelegramNotifier;
use crate::platform::{deliver_all, MessageSink};
use crate::quote::QuoteClient;
use crate::weather::WeatherClient;

/// Substitutes an empty sentence for a failed step, logging why.
fn or_empty(what: &str, result: Result<String, FetchError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            error!("Error getting {}: {}", what, e);
            String::new()
        }
    }
}

/// Gathers every sentence and composes the morning messages. Never fails:
/// missing pieces become empty strings.
pub async fn build_messages(config: &Config, http: &reqwest::Client) -> Vec<String> {
    let quote = QuoteClient::new(http.clone(), config.quote.clone())
        .fetch()
        .await;
    let quote = or_empty("quote", quote);

    let weather = WeatherClient::new(http.clone(), config.weather.clone())
        .fetch()
        .await;
    let weather = or_empty("weather", weather);

    let today = date::today_sentence();
    let countdown = date::countdown(&config.countdown.end_date, &config.countdown.event)
        .map(|c| c.to_string());
    let countdown = or_empty("countdown", countdown);

    let messages = MessageComposer::new(config.general.name.as_str())
        .compose(&quote, &weather, &today, &countdown);
    for (i, message) in messages.iter().enumerate() {
        debug!("Message {}: {}", i + 1, message);
    }
    messages
}

/// One full run: fetch, compose, send.
pub async fn run(config: &Config, http: &reqwest::Client) {
    let messages = build_messages(config, http).await;
    let notifier = TelegramNotifier::new(http.clone(), &config.telegram);
    send_messages(&notifier, &messages).await;
}

async fn send_messages(sink: &dyn MessageSink, messages: &[String]) {
    let delivered = deliver_all(sink, messages).await;
    info!("Delivered {}/{} messages", delivered, messages.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountdownConfig, GeneralConfig, QuoteConfig, TelegramConfig, WeatherConfig};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            general: GeneralConfig {
                name: "Sam".to_string(),
            },
            quote: QuoteConfig {
                api_key: "qk".to_string(),
                base_url: server.uri(),
            },
            weather: WeatherConfig {
                api_key: "wk".to_string(),
                latitude: "1".to_string(),
                longitude: "2".to_string(),
                base_url: server.uri(),
            },
            countdown: CountdownConfig {
                end_date: "2000-01-01".to_string(),
                event: "X".to_string(),
            },
            telegram: TelegramConfig {
                bot_token: "TOKEN".to_string(),
                chat_id: "7".to_string(),
                api_base: server.uri(),
            },
        }
    }

    #[tokio::test]
    async fn test_run_sends_both_messages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"quote": "Q", "author": "A"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"description": "clear sky"}],
                "main": {"temp": 70.04}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let config = config_for(&server);
        run(&config, &reqwest::Client::new()).await;

        let sent: Vec<serde_json::Value> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.method.as_str() == "POST")
            .map(|r| r.body_json().unwrap())
            .collect();
        assert_eq!(sent.len(), 2);

        let first = sent[0]["text"].as_str().unwrap();
        assert!(first.starts_with("Good morning 👋 Sam. Today is "));
        assert!(first.ends_with(".Today is 70.0°F with clear skies 🌞."));
        assert_eq!(
            sent[1]["text"],
            "A once said: \"Q\". The date ofXhas already passed."
        );
        assert_eq!(sent[1]["chat_id"], "7");
    }

    #[tokio::test]
    async fn test_failed_fetches_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.countdown.end_date = "not a date".to_string();

        let messages = build_messages(&config, &reqwest::Client::new()).await;
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Good morning 👋 Sam. Today is "));
        assert!(messages[0].ends_with('.'));
        assert_eq!(messages[1], ". ");
    }

    #[tokio::test]
    async fn test_missing_keys_skip_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.quote.api_key.clear();
        config.weather.api_key.clear();

        let messages = build_messages(&config, &reqwest::Client::new()).await;
        assert_eq!(messages[1], ". The date ofXhas already passed.");
    }

    #[test]
    fn test_or_empty() {
        assert_eq!(or_empty("x", Ok("text".to_string())), "text");
        assert_eq!(
            or_empty("x", Err(FetchError::EmptyResult("none".to_string()))),
            ""
        );
    }
}
