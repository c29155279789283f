use thiserror::Error;

/// Failures a page fetch can settle with.
///
/// The coordinator never inspects these beyond clearing the loading flag; they
/// travel inside a [`Settlement`](crate::list::Settlement) so the owning view
/// can decide how to present them and whether to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// The data source reported a failure.
    #[error("Page fetch failed: {0}")]
    Fetch(String),

    /// The fetch did not settle within the configured timeout.
    #[error("Page fetch timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// The loader or its pool was shut down while the fetch ran.
    #[error("Page fetch was cancelled")]
    Cancelled,
}

impl PagingError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, PagingError::Fetch(_) | PagingError::Timeout { .. })
    }
}
