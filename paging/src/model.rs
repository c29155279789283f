use std::fmt;

/// Default distance from the arrival edge below which a scroll fires a load.
pub const DEFAULT_THRESHOLD: u32 = 250;

/// Paging flags for one list instance.
///
/// `is_loading` is true for the whole span between invoking the fetch and its
/// settlement. A new fetch is never started while `is_loading` is true or
/// `has_next_page` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingState {
    pub has_next_page: bool,
    pub is_loading: bool,
    pub reverse: bool,
    pub threshold: u32,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            has_next_page: true,
            is_loading: false,
            reverse: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PagingState {
    pub fn new(has_next_page: bool) -> Self {
        Self {
            has_next_page,
            ..Self::default()
        }
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A list edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "top"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

/// What produced a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    Scroll,
    Button,
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerSource::Scroll => write!(f, "scroll"),
            TriggerSource::Button => write!(f, "button"),
        }
    }
}

/// Why a fetch was requested. Used for routing and logging only, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTrigger {
    pub source: TriggerSource,
    pub position: Edge,
}

impl LoadTrigger {
    pub fn scroll(position: Edge) -> Self {
        Self {
            source: TriggerSource::Scroll,
            position,
        }
    }

    pub fn button(position: Edge) -> Self {
        Self {
            source: TriggerSource::Button,
            position,
        }
    }
}

impl fmt::Display for LoadTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.source, self.position)
    }
}

/// Scroll geometry of a list view, in display units (pixels, terminal rows).
///
/// `offset` is the distance from the top of the content to the top of the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub offset: u32,
    pub content_height: u32,
    pub viewport_height: u32,
}

impl ScrollMetrics {
    pub fn new(offset: u32, content_height: u32, viewport_height: u32) -> Self {
        Self {
            offset,
            content_height,
            viewport_height,
        }
    }

    /// Unscrolled distance left between the viewport and `edge`.
    pub fn remaining_to(&self, edge: Edge) -> u32 {
        match edge {
            Edge::Top => self.offset,
            Edge::Bottom => self
                .content_height
                .saturating_sub(self.viewport_height)
                .saturating_sub(self.offset),
        }
    }

    /// True when the content does not fill the viewport, so no scroll event
    /// can ever be observed.
    pub fn is_unfilled(&self) -> bool {
        self.content_height <= self.viewport_height
    }

    /// Largest meaningful offset for this geometry.
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

/// What a data source is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation cursor from the previous page, `None` for the first page.
    pub cursor: Option<String>,
    pub page_size: u32,
}

/// A request handed to a [`PageRequester`](crate::contract::PageRequester)
/// after a trigger was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub trigger: LoadTrigger,
    /// Generation of the list instance that accepted the trigger. Settlements
    /// carrying an older generation are discarded.
    pub generation: u64,
    pub cursor: Option<String>,
}

/// One fetched page. Items are in display order (oldest first for chat
/// history), whatever edge they are merged at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// A final page with no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_distance_forward() {
        let metrics = ScrollMetrics::new(1300, 2000, 500);
        assert_eq!(metrics.remaining_to(Edge::Bottom), 200);
        assert_eq!(metrics.remaining_to(Edge::Top), 1300);
    }

    #[test]
    fn test_remaining_distance_saturates_past_end() {
        let metrics = ScrollMetrics::new(1800, 2000, 500);
        assert_eq!(metrics.remaining_to(Edge::Bottom), 0);
    }

    #[test]
    fn test_unfilled_viewport() {
        assert!(ScrollMetrics::new(0, 300, 500).is_unfilled());
        assert!(ScrollMetrics::new(0, 500, 500).is_unfilled());
        assert!(!ScrollMetrics::new(0, 501, 500).is_unfilled());
    }

    #[test]
    fn test_default_state() {
        let state = PagingState::default();
        assert!(state.has_next_page);
        assert!(!state.is_loading);
        assert!(!state.reverse);
        assert_eq!(state.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(LoadTrigger::scroll(Edge::Top).to_string(), "scroll@top");
        assert_eq!(LoadTrigger::button(Edge::Bottom).to_string(), "button@bottom");
    }
}
