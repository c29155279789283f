use serde::Deserialize;
use std::time::Duration;

/// `[demo]` section: shape of the in-memory chat history
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DemoConfig {
    total_messages: Option<u32>,
    latency_ms: Option<u64>,
    failure_rate: Option<f64>,
}

impl DemoConfig {
    pub fn new(total_messages: u32, latency_ms: u64, failure_rate: f64) -> Self {
        Self {
            total_messages: Some(total_messages),
            latency_ms: Some(latency_ms),
            failure_rate: Some(failure_rate),
        }
    }

    pub fn total_messages(&self) -> u32 {
        self.total_messages.unwrap_or(200)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms.unwrap_or(400))
    }

    /// Probability, between 0 and 1, that a fetch fails
    pub fn failure_rate(&self) -> f64 {
        self.failure_rate.unwrap_or(0.0)
    }
}
