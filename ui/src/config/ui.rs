use serde::Deserialize;
use std::time::Duration;

/// UI-specific configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UIConfig {
    /// Duration between animation frames for loading indicators (default: 100ms)
    loading_frame_duration_ms: Option<u64>,
    tick_interval_ms: Option<u64>,
    poll_timeout_ms: Option<u64>,
    input_listener_interval_ms: Option<u64>,
    input_listener_retries: Option<usize>,
    /// Maximum number of page fetches running at once
    task_pool_size: Option<usize>,
}

impl UIConfig {
    /// Get the loading frame duration in milliseconds
    pub fn loading_frame_duration_ms(&self) -> u64 {
        self.loading_frame_duration_ms.unwrap_or(100)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.unwrap_or(50))
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    pub fn input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.input_listener_interval_ms.unwrap_or(10))
    }

    pub fn input_listener_retries(&self) -> usize {
        self.input_listener_retries.unwrap_or(10)
    }

    pub fn task_pool_size(&self) -> usize {
        self.task_pool_size.unwrap_or(4)
    }
}
