use paging::PaginationMode;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_LOADER_TEXT: &str = "Loading messages...";
pub const DEFAULT_LOAD_MORE_LABEL: &str = "[ Load more messages (Enter) ]";
pub const DEFAULT_LOAD_MORE_BUSY_LABEL: &str = "[ Loading messages... ]";

/// `[pagination]` section: how the history view pages
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PaginationConfig {
    mode: Option<PaginationMode>,
    reverse: Option<bool>,
    threshold: Option<u32>,
    page_size: Option<u32>,
    fetch_timeout_ms: Option<u64>,
    loader_text: Option<String>,
    load_more_label: Option<String>,
    load_more_busy_label: Option<String>,
}

/// Text of the loader and the load-more control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordanceLabels {
    pub loader: String,
    pub load_more: String,
    pub load_more_busy: String,
}

impl Default for AffordanceLabels {
    fn default() -> Self {
        Self {
            loader: DEFAULT_LOADER_TEXT.to_string(),
            load_more: DEFAULT_LOAD_MORE_LABEL.to_string(),
            load_more_busy: DEFAULT_LOAD_MORE_BUSY_LABEL.to_string(),
        }
    }
}

/// Blank values fall back to the default so the affordance never vanishes
fn text_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(default)
}

impl PaginationConfig {
    pub fn mode(&self) -> PaginationMode {
        self.mode.unwrap_or_default()
    }

    /// Chat history grows upward, so reverse is the default
    pub fn reverse(&self) -> bool {
        self.reverse.unwrap_or(true)
    }

    /// Trigger distance in terminal rows
    pub fn threshold(&self) -> u32 {
        self.threshold.unwrap_or(3)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(25)
    }

    pub fn fetch_timeout_ms(&self) -> u64 {
        self.fetch_timeout_ms.unwrap_or(10_000)
    }

    /// Shown at the arrival edge while a scroll-triggered fetch runs
    pub fn loader_text(&self) -> &str {
        text_or(&self.loader_text, DEFAULT_LOADER_TEXT)
    }

    pub fn load_more_label(&self) -> &str {
        text_or(&self.load_more_label, DEFAULT_LOAD_MORE_LABEL)
    }

    pub fn load_more_busy_label(&self) -> &str {
        text_or(&self.load_more_busy_label, DEFAULT_LOAD_MORE_BUSY_LABEL)
    }

    pub fn labels(&self) -> AffordanceLabels {
        AffordanceLabels {
            loader: self.loader_text().to_string(),
            load_more: self.load_more_label().to_string(),
            load_more_busy: self.load_more_busy_label().to_string(),
        }
    }

    /// `None` when the timeout is disabled with `0`
    pub fn fetch_timeout(&self) -> Option<Duration> {
        match self.fetch_timeout_ms() {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }
}
