pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Somewhere a composed message can be delivered
#[async_trait]
pub trait MessageSink {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Sends every message in order. A failed send is logged and the next
/// message is still attempted.
pub async fn deliver_all<S: MessageSink + ?Sized>(sink: &S, messages: &[String]) -> usize {
    let mut delivered = 0;
    for (i, message) in messages.iter().enumerate() {
        match sink.send(message).await {
            Ok(()) => delivered += 1,
            Err(e) => error!("Failed to send message {}: {:#}", i + 1, e),
        }
    }
    delivered
}
