use crate::contract::{PageRequester, PageSource};
use crate::errors::PagingError;
use crate::list::Settlement;
use crate::model::{FetchRequest, PageRequest};
use crate::taskpool::TaskPool;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs fetches for a [`PageSource`] on a [`TaskPool`] and delivers the
/// result to the list view as a [`Settlement`].
///
/// Every started fetch produces exactly one settlement: failures and
/// timeouts settle as errors so the loading flag always clears. Dropping the
/// loader or shutting the pool down settles fetches still in flight as
/// [`PagingError::Cancelled`]. A request still waiting for a pool permit at
/// shutdown never starts and never settles.
pub struct PageLoader<S: PageSource> {
    source: Arc<S>,
    pool: TaskPool,
    tx: Sender<Settlement<S::Item>>,
    page_size: u32,
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl<S: PageSource> PageLoader<S> {
    pub fn new(source: S, pool: TaskPool, tx: Sender<Settlement<S::Item>>, page_size: u32) -> Self {
        let cancel = pool.cancellation_token().child_token();
        Self {
            source: Arc::new(source),
            pool,
            tx,
            page_size,
            timeout: None,
            cancel,
        }
    }

    /// Bound how long a fetch may stay unsettled. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Settle every in-flight fetch as cancelled. Later requests settle
    /// the same way without reaching the source.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn run_fetch(
        source: Arc<S>,
        request: PageRequest,
        timeout: Option<Duration>,
    ) -> Result<crate::model::Page<S::Item>, PagingError> {
        let fetch = source.fetch_page(request);
        match timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    log::warn!("Page fetch timed out after {limit:?}");
                    Err(PagingError::Timeout {
                        millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    })
                }
            },
            None => fetch.await,
        }
    }
}

impl<S: PageSource> PageRequester for PageLoader<S> {
    fn request_next_page(&mut self, request: FetchRequest) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        let timeout = self.timeout;
        let cancel = self.cancel.clone();
        let generation = request.generation;
        let page_request = PageRequest {
            cursor: request.cursor,
            page_size: self.page_size,
        };

        log::debug!(
            "Spawning page fetch: trigger={}, generation={generation}, page_size={}",
            request.trigger,
            page_request.page_size
        );

        self.pool.execute(async move {
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => Err(PagingError::Cancelled),
                outcome = Self::run_fetch(source, page_request, timeout) => outcome,
            };
            if let Err(error) = &outcome {
                log::debug!("Fetch for generation {generation} settled with error: {error}");
            }

            // The receiver is gone once the list view is torn down.
            if tx.send(Settlement { generation, outcome }).is_err() {
                log::debug!("List view dropped, discarding settlement for generation {generation}");
            }
        });
    }
}

impl<S: PageSource> Drop for PageLoader<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
