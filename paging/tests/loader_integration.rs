use async_trait::async_trait;
use claims::*;
use paging::{
    LoadingPhase, Page, PageLoader, PageRequest, PageSource, PagedList, PaginationMode,
    PagingError, PagingState, SettleOutcome, Settlement, TaskPool,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

// Helper modules for loader integration tests
mod helpers {
    use super::*;

    /// Behaviour of the mock source for every fetch
    #[derive(Clone, Copy)]
    pub enum Behaviour {
        /// Serve `total` numbered items in pages
        Serve { total: u32 },
        Fail,
        NeverSettle,
    }

    pub struct MockSource {
        pub behaviour: Behaviour,
        pub latency: Duration,
        pub calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PageSource for MockSource {
        type Item = u32;

        async fn fetch_page(&self, request: PageRequest) -> Result<Page<u32>, PagingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.latency).await;

            match self.behaviour {
                Behaviour::Serve { total } => {
                    let start: u32 = request
                        .cursor
                        .as_deref()
                        .map(|c| c.parse().unwrap_or(0))
                        .unwrap_or(0);
                    let end = (start + request.page_size).min(total);
                    let next = (end < total).then(|| end.to_string());
                    Ok(Page::new((start..end).collect(), next))
                }
                Behaviour::Fail => Err(PagingError::Fetch("backend unavailable".to_string())),
                Behaviour::NeverSettle => futures::future::pending().await,
            }
        }
    }

    pub fn setup(
        behaviour: Behaviour,
        timeout: Option<Duration>,
    ) -> (
        PageLoader<MockSource>,
        Receiver<Settlement<u32>>,
        Arc<AtomicUsize>,
    ) {
        let (tx, rx) = mpsc::channel();
        let calls = Arc::new(AtomicUsize::new(0));
        let source = MockSource {
            behaviour,
            latency: Duration::from_millis(10),
            calls: calls.clone(),
        };
        let loader = PageLoader::new(source, TaskPool::new(4), tx, 10).with_timeout(timeout);
        (loader, rx, calls)
    }

    pub fn never_settling_loader(
        pool: &TaskPool,
    ) -> (PageLoader<MockSource>, Receiver<Settlement<u32>>) {
        let (tx, rx) = mpsc::channel();
        let source = MockSource {
            behaviour: Behaviour::NeverSettle,
            latency: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        };
        (PageLoader::new(source, pool.clone(), tx, 10), rx)
    }

    /// Wait for the next settlement without blocking the runtime
    pub async fn next_settlement(rx: &Receiver<Settlement<u32>>) -> Option<Settlement<u32>> {
        for _ in 0..200 {
            if let Ok(settlement) = rx.try_recv() {
                return Some(settlement);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        None
    }

    pub fn button_list() -> PagedList<u32> {
        PagedList::new(PagingState::new(true), PaginationMode::Button)
    }
}

use helpers::*;

#[tokio::test]
async fn test_pages_until_exhausted() {
    let (mut loader, rx, calls) = setup(Behaviour::Serve { total: 25 }, None);
    let mut list = button_list();

    for expected in [10usize, 20, 25] {
        assert!(list.activate_button(&mut loader).fired());
        let settlement = assert_some!(next_settlement(&rx).await);
        assert_matches!(list.settle(settlement), SettleOutcome::Applied { .. });
        assert_eq!(list.items().len(), expected);
    }

    assert_eq!(list.phase(), LoadingPhase::Exhausted);
    assert!(!list.activate_button(&mut loader).fired());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_duplicate_clicks_spawn_one_fetch() {
    let (mut loader, rx, calls) = setup(Behaviour::Serve { total: 100 }, None);
    let mut list = button_list();

    assert!(list.activate_button(&mut loader).fired());
    for _ in 0..5 {
        assert!(!list.activate_button(&mut loader).fired());
    }

    let settlement = assert_some!(next_settlement(&rx).await);
    list.settle(settlement);
    tokio::time::sleep(Duration::from_millis(30)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_err!(rx.try_recv());
}

#[tokio::test]
async fn test_failed_fetch_clears_loading() {
    let (mut loader, rx, _) = setup(Behaviour::Fail, None);
    let mut list = button_list();

    list.activate_button(&mut loader);
    let settlement = assert_some!(next_settlement(&rx).await);
    let outcome = list.settle(settlement);

    assert_matches!(outcome, SettleOutcome::Failed(PagingError::Fetch(_)));
    assert!(!list.state().is_loading);
    assert!(list.state().has_next_page);
    assert!(list.activate_button(&mut loader).fired());
}

#[tokio::test]
async fn test_timeout_settles_never_ending_fetch() {
    let (mut loader, rx, _) = setup(Behaviour::NeverSettle, Some(Duration::from_millis(50)));
    let mut list = button_list();

    list.activate_button(&mut loader);
    let settlement = assert_some!(next_settlement(&rx).await);
    let outcome = list.settle(settlement);

    assert_eq!(outcome, SettleOutcome::Failed(PagingError::Timeout { millis: 50 }));
    assert_eq!(list.phase(), LoadingPhase::Idle);
}

#[tokio::test]
async fn test_without_timeout_fetch_stays_loading() {
    let (mut loader, rx, _) = setup(Behaviour::NeverSettle, None);
    let mut list = button_list();

    list.activate_button(&mut loader);
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_err!(rx.try_recv());
    assert!(list.state().is_loading);
}

#[tokio::test]
async fn test_settlement_after_dispose_is_discarded() {
    let (mut loader, rx, _) = setup(Behaviour::Serve { total: 100 }, None);
    let mut list = button_list();

    list.activate_button(&mut loader);
    list.dispose();

    let settlement = assert_some!(next_settlement(&rx).await);
    assert_eq!(list.settle(settlement), SettleOutcome::Discarded);
    assert!(list.items().is_empty());
}

#[tokio::test]
async fn test_settlement_after_reset_is_discarded() {
    let (mut loader, rx, _) = setup(Behaviour::Serve { total: 100 }, None);
    let mut list = button_list();

    list.activate_button(&mut loader);
    list.reset(true);

    let settlement = assert_some!(next_settlement(&rx).await);
    assert_eq!(settlement.generation, 0);
    assert_eq!(list.settle(settlement), SettleOutcome::Discarded);
    assert!(list.items().is_empty());
    assert_eq!(list.phase(), LoadingPhase::Idle);
}

#[tokio::test]
async fn test_dropped_receiver_does_not_panic() {
    let (mut loader, rx, calls) = setup(Behaviour::Serve { total: 100 }, None);
    let mut list = button_list();
    drop(rx);

    list.activate_button(&mut loader);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pool_shutdown_settles_running_fetch_as_cancelled() {
    let pool = TaskPool::new(2);
    let (mut loader, rx) = never_settling_loader(&pool);
    let mut list = button_list();

    list.activate_button(&mut loader);
    tokio::time::sleep(Duration::from_millis(20)).await;
    pool.shutdown();

    let settlement = assert_some!(next_settlement(&rx).await);
    assert_eq!(
        list.settle(settlement),
        SettleOutcome::Failed(PagingError::Cancelled)
    );
    assert!(!list.state().is_loading);
    assert!(loader.is_cancelled());
}

#[tokio::test]
async fn test_dropping_loader_cancels_only_its_fetches() {
    let pool = TaskPool::new(2);
    let (mut first, first_rx) = never_settling_loader(&pool);
    let (mut second, second_rx) = never_settling_loader(&pool);
    let mut first_list = button_list();
    let mut second_list = button_list();

    first_list.activate_button(&mut first);
    second_list.activate_button(&mut second);
    tokio::time::sleep(Duration::from_millis(20)).await;
    drop(first);

    let settlement = assert_some!(next_settlement(&first_rx).await);
    assert_eq!(settlement.outcome, Err(PagingError::Cancelled));

    assert_err!(second_rx.try_recv());
    assert!(!pool.is_cancelled());
    assert!(second_list.state().is_loading);
}

#[test]
fn test_cancellation_is_not_transient() {
    assert!(!PagingError::Cancelled.is_transient());
    assert!(PagingError::Timeout { millis: 10 }.is_transient());
}
