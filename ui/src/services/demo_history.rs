use crate::config::demo::DemoConfig;
use crate::models::ChatMessage;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use paging::{Page, PageRequest, PageSource, PagingError};
use rand::Rng;
use std::time::Duration;

const AUTHORS: [&str; 4] = ["ana", "bo", "cyd", "dee"];

const PHRASES: [&str; 10] = [
    "did the deploy go out?",
    "yes, rolled back once, then fine",
    "lunch?",
    "can someone review my branch",
    "looking now",
    "the flaky test is back",
    "I'll pin the version for now",
    "meeting moved to 3",
    "thanks!",
    "see the thread above",
];

/// First message of conversation 0
const EPOCH_SECS: i64 = 1_700_000_000;

/// Which end of the history the first page comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOrder {
    /// Chat style: newest page first, older pages after it
    NewestFirst,
    /// Feed style: oldest page first
    OldestFirst,
}

impl HistoryOrder {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            HistoryOrder::NewestFirst
        } else {
            HistoryOrder::OldestFirst
        }
    }
}

/// Deterministic in-memory chat history served page by page.
///
/// The cursor is the number of messages already served, as a decimal string.
/// Every page is returned in display order (oldest first) whichever end of
/// the history it comes from.
#[derive(Debug, Clone)]
pub struct DemoHistorySource {
    conversation: u32,
    total: u32,
    order: HistoryOrder,
    latency: Duration,
    failure_rate: f64,
}

impl DemoHistorySource {
    pub fn new(conversation: u32, total: u32, order: HistoryOrder) -> Self {
        Self {
            conversation,
            total,
            order,
            latency: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    pub fn from_config(conversation: u32, order: HistoryOrder, config: &DemoConfig) -> Self {
        Self::new(conversation, config.total_messages(), order)
            .with_latency(config.latency())
            .with_failure_rate(config.failure_rate())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    pub fn conversation(&self) -> u32 {
        self.conversation
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Build message `sequence` of this conversation
    pub fn message(&self, sequence: u32) -> ChatMessage {
        let seed = sequence as usize + self.conversation as usize * 3;
        let base = DateTime::<Utc>::from_timestamp(
            EPOCH_SECS + i64::from(self.conversation) * 86_400,
            0,
        )
        .unwrap_or_default();
        ChatMessage::new(
            sequence,
            AUTHORS[seed % AUTHORS.len()],
            PHRASES[(seed * 7) % PHRASES.len()],
            base + ChronoDuration::minutes(i64::from(sequence)),
        )
    }

    fn parse_cursor(cursor: Option<&str>) -> Result<u32, PagingError> {
        match cursor {
            None => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| PagingError::Fetch(format!("invalid cursor '{raw}'"))),
        }
    }

    /// Serve one page without latency or failures
    pub fn page_at(&self, request: &PageRequest) -> Result<Page<ChatMessage>, PagingError> {
        let served = Self::parse_cursor(request.cursor.as_deref())?.min(self.total);
        let remaining = self.total - served;
        let count = request.page_size.min(remaining);

        let range = match self.order {
            HistoryOrder::NewestFirst => (remaining - count)..remaining,
            HistoryOrder::OldestFirst => served..served + count,
        };

        let items = range.map(|sequence| self.message(sequence)).collect();
        let served = served + count;
        let next_cursor = (served < self.total).then(|| served.to_string());
        Ok(Page::new(items, next_cursor))
    }
}

#[async_trait]
impl PageSource for DemoHistorySource {
    type Item = ChatMessage;

    async fn fetch_page(&self, request: PageRequest) -> Result<Page<ChatMessage>, PagingError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let fail = self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate);
        if fail {
            log::warn!(
                "Simulated failure for conversation {} at cursor {:?}",
                self.conversation,
                request.cursor
            );
            return Err(PagingError::Fetch("simulated network failure".to_string()));
        }

        let page = self.page_at(&request)?;
        log::debug!(
            "Served {} messages of conversation {} (next cursor: {:?})",
            page.items.len(),
            self.conversation,
            page.next_cursor
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    fn request(cursor: Option<&str>, page_size: u32) -> PageRequest {
        PageRequest {
            cursor: cursor.map(str::to_string),
            page_size,
        }
    }

    #[test]
    fn test_newest_first_pages_walk_backwards() {
        let source = DemoHistorySource::new(0, 30, HistoryOrder::NewestFirst);

        let first = assert_ok!(source.page_at(&request(None, 25)));
        assert_eq!(first.items.first().map(|m| m.sequence), Some(5));
        assert_eq!(first.items.last().map(|m| m.sequence), Some(29));
        assert_eq!(first.next_cursor.as_deref(), Some("25"));

        let second = assert_ok!(source.page_at(&request(Some("25"), 25)));
        let sequences: Vec<u32> = second.items.iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
        assert_none!(second.next_cursor);
    }

    #[test]
    fn test_oldest_first_pages_walk_forwards() {
        let source = DemoHistorySource::new(0, 30, HistoryOrder::OldestFirst);

        let first = assert_ok!(source.page_at(&request(None, 10)));
        assert_eq!(first.items.first().map(|m| m.sequence), Some(0));
        assert_eq!(first.next_cursor.as_deref(), Some("10"));
    }

    #[test]
    fn test_empty_history_is_exhausted_immediately() {
        let source = DemoHistorySource::new(0, 0, HistoryOrder::NewestFirst);
        let page = assert_ok!(source.page_at(&request(None, 10)));
        assert!(page.items.is_empty());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_invalid_cursor_is_a_fetch_error() {
        let source = DemoHistorySource::new(0, 10, HistoryOrder::NewestFirst);
        assert_matches!(
            source.page_at(&request(Some("abc"), 10)),
            Err(PagingError::Fetch(_))
        );
    }

    #[test]
    fn test_conversations_differ() {
        let first = DemoHistorySource::new(0, 10, HistoryOrder::NewestFirst);
        let second = DemoHistorySource::new(1, 10, HistoryOrder::NewestFirst);
        assert_ne!(first.message(0), second.message(0));
    }

    #[tokio::test]
    async fn test_certain_failure() {
        let source =
            DemoHistorySource::new(0, 10, HistoryOrder::NewestFirst).with_failure_rate(1.0);
        assert_err!(source.fetch_page(request(None, 5)).await);
    }
}
