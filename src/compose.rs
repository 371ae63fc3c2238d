/// Builds the two morning messages for one recipient.
pub struct MessageComposer {
    name: String,
}

impl MessageComposer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Greeting, date and weather first; quote and countdown second.
    ///
    /// Inputs are used as given. A failed fetch arrives here as an empty
    /// string and the messages are still built and sent. Nothing is
    /// inserted between the date and weather sentences.
    pub fn compose(&self, quote: &str, weather: &str, date: &str, countdown: &str) -> Vec<String> {
        vec![
            format!("Good morning 👋 {}. {}{}", self.name, date, weather),
            format!("{}. {}", quote, countdown),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_order_and_format() {
        let composer = MessageComposer::new("Sam");
        let messages = composer.compose(
            "A once said: \"Q\"",
            "Today is 72.3°F with few clouds.",
            "Today is Monday, October 19th.",
            "There are 10 days left until the trip.",
        );

        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            "Good morning 👋 Sam. Today is Monday, October 19th.Today is 72.3°F with few clouds."
        );
        assert_eq!(
            messages[1],
            "A once said: \"Q\". There are 10 days left until the trip."
        );
    }

    #[test]
    fn test_compose_with_empty_quote() {
        let messages = MessageComposer::new("Sam").compose("", "W", "D", "C");
        assert_eq!(messages, vec!["Good morning 👋 Sam. DW", ". C"]);
    }

    #[test]
    fn test_compose_with_everything_empty() {
        let messages = MessageComposer::new("").compose("", "", "", "");
        assert_eq!(messages, vec!["Good morning 👋 . ", ". "]);
    }
}
