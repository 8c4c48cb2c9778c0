use anyhow::Result;
use async_trait::async_trait;

/// Narrow seam to the message-bus collaborator.
#[async_trait]
pub trait EventProducer: Send + Sync {
    async fn produce(&self, topic: &str, payload: serde_json::Value) -> Result<()>;
}

/// Producer that writes events to the structured log instead of a broker.
///
/// Every event is wrapped in an envelope with a unique id and a produce
/// timestamp, the same metadata a broker client would stamp.
pub struct LogEventProducer;

#[async_trait]
impl EventProducer for LogEventProducer {
    async fn produce(&self, topic: &str, payload: serde_json::Value) -> Result<()> {
        let envelope = serde_json::json!({
            "event_id": uuid::Uuid::new_v4().to_string(),
            "produced_at": now_ms(),
            "payload": payload,
        });
        tracing::info!("event {} {}", topic, envelope);
        Ok(())
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
