use crate::contract::PageRequester;
use crate::errors::PagingError;
use crate::model::{Edge, FetchRequest, LoadTrigger, Page, PagingState, ScrollMetrics};
use crate::orientation::Orientation;
use crate::state_machine::{LoadingPhase, Suppression, TriggerOutcome};
use crate::strategy::{LoadMoreControl, PaginationMode, PaginationStrategy};

/// Ordered sequence of rendered items, owned by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList<T> {
    items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> ItemList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub(crate) fn append(&mut self, incoming: Vec<T>) {
        self.items.extend(incoming);
    }

    pub(crate) fn prepend(&mut self, incoming: Vec<T>) {
        self.items.splice(0..0, incoming);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Result of a fetch, tagged with the generation of the list that asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement<T> {
    pub generation: u64,
    pub outcome: Result<Page<T>, PagingError>,
}

impl<T> Settlement<T> {
    pub fn success(generation: u64, page: Page<T>) -> Self {
        Self {
            generation,
            outcome: Ok(page),
        }
    }

    pub fn failure(generation: u64, error: PagingError) -> Self {
        Self {
            generation,
            outcome: Err(error),
        }
    }
}

/// What happened to a settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The page was merged.
    Applied { added: usize, phase: LoadingPhase },
    /// The fetch failed; loading cleared, `has_next_page` unchanged.
    Failed(PagingError),
    /// The settlement belonged to a disposed or reset instance and was
    /// dropped without touching items or state.
    Discarded,
}

/// A paginated list view's state: the items it renders, its paging flags and
/// the trigger strategy chosen at construction.
///
/// All mutation happens through the trigger methods and [`PagedList::settle`];
/// there is no other writer.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    items: ItemList<T>,
    state: PagingState,
    strategy: PaginationStrategy,
    cursor: Option<String>,
    generation: u64,
    disposed: bool,
}

impl<T> PagedList<T> {
    pub fn new(state: PagingState, mode: PaginationMode) -> Self {
        log::debug!(
            "Creating paged list: mode={mode}, reverse={}, threshold={}, has_next_page={}",
            state.reverse,
            state.threshold,
            state.has_next_page
        );
        Self {
            items: ItemList::new(),
            state,
            strategy: PaginationStrategy::from_mode(mode),
            cursor: None,
            generation: 0,
            disposed: false,
        }
    }

    pub fn items(&self) -> &ItemList<T> {
        &self.items
    }

    pub fn state(&self) -> &PagingState {
        &self.state
    }

    pub fn phase(&self) -> LoadingPhase {
        self.state.phase()
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    pub fn mode(&self) -> PaginationMode {
        self.strategy.mode()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Edge the loading indicator renders at, if one is shown.
    pub fn loader_edge(&self) -> Option<Edge> {
        self.strategy.loader_edge(&self.state)
    }

    /// The load-more control, if one is shown.
    pub fn control(&self) -> Option<LoadMoreControl> {
        self.strategy.control(&self.state)
    }

    /// First render of the list.
    pub fn on_mount<R>(&mut self, metrics: ScrollMetrics, requester: &mut R) -> TriggerOutcome
    where
        R: PageRequester + ?Sized,
    {
        if self.disposed {
            return Self::suppressed(Suppression::Disposed);
        }
        match self.strategy.on_mount(&self.state, metrics) {
            Ok(trigger) => self.fire(trigger, requester),
            Err(reason) => Self::suppressed(reason),
        }
    }

    pub fn on_scroll<R>(&mut self, metrics: ScrollMetrics, requester: &mut R) -> TriggerOutcome
    where
        R: PageRequester + ?Sized,
    {
        if self.disposed {
            return Self::suppressed(Suppression::Disposed);
        }
        match self.strategy.on_scroll(&self.state, metrics) {
            Ok(trigger) => self.fire(trigger, requester),
            Err(reason) => Self::suppressed(reason),
        }
    }

    pub fn activate_button<R>(&mut self, requester: &mut R) -> TriggerOutcome
    where
        R: PageRequester + ?Sized,
    {
        if self.disposed {
            return Self::suppressed(Suppression::Disposed);
        }
        match self.strategy.on_activate(&self.state) {
            Ok(trigger) => self.fire(trigger, requester),
            Err(reason) => Self::suppressed(reason),
        }
    }

    fn fire<R>(&mut self, trigger: LoadTrigger, requester: &mut R) -> TriggerOutcome
    where
        R: PageRequester + ?Sized,
    {
        if let Err(reason) = self.state.begin_load() {
            return Self::suppressed(reason);
        }

        log::debug!(
            "Requesting next page: trigger={trigger}, generation={}, cursor={:?}",
            self.generation,
            self.cursor
        );
        requester.request_next_page(FetchRequest {
            trigger,
            generation: self.generation,
            cursor: self.cursor.clone(),
        });
        TriggerOutcome::Fired(trigger)
    }

    fn suppressed(reason: Suppression) -> TriggerOutcome {
        log::debug!("Trigger suppressed: {reason}");
        TriggerOutcome::Suppressed(reason)
    }

    /// Apply a settled fetch.
    pub fn settle(&mut self, settlement: Settlement<T>) -> SettleOutcome {
        if self.disposed {
            log::debug!(
                "Discarding settlement for disposed list (generation {})",
                settlement.generation
            );
            return SettleOutcome::Discarded;
        }
        if settlement.generation != self.generation {
            log::debug!(
                "Discarding stale settlement: generation {} != current {}",
                settlement.generation,
                self.generation
            );
            return SettleOutcome::Discarded;
        }
        if !self.state.is_loading {
            log::warn!("Discarding settlement that arrived while no fetch was in flight");
            return SettleOutcome::Discarded;
        }

        match settlement.outcome {
            Ok(page) => {
                let has_next_page = page.has_next_page();
                let added = page.items.len();
                self.cursor = page.next_cursor;
                self.state.orientation().merge(&mut self.items, page.items);
                let phase = self.state.settle(has_next_page);

                log::info!(
                    "Page applied: added={added}, total={}, phase={phase}",
                    self.items.len()
                );
                SettleOutcome::Applied { added, phase }
            }
            Err(error) => {
                let phase = self.state.settle_failed();
                log::warn!("Page fetch failed, list back to {phase}: {error}");
                SettleOutcome::Failed(error)
            }
        }
    }

    /// Full reset for a new data set, e.g. switching conversations. Any fetch
    /// still in flight becomes stale.
    pub fn reset(&mut self, has_next_page: bool) {
        self.generation += 1;
        self.items.clear();
        self.cursor = None;
        self.state.reset(has_next_page);
        self.strategy.reset();
        log::info!(
            "Paged list reset: generation={}, has_next_page={has_next_page}",
            self.generation
        );
    }

    /// Mark the view as gone. Later triggers and settlements are dropped.
    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("Disposing paged list (generation {})", self.generation);
        }
        self.disposed = true;
    }

    /// Switch orientation. Paging flags are left as they are.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.state.reverse = reverse;
    }

    pub fn set_threshold(&mut self, threshold: u32) {
        self.state.threshold = threshold;
    }

    /// Apply flags pushed by the data owner.
    pub fn sync_props(&mut self, has_next_page: bool, refreshing: bool) {
        if self.disposed {
            return;
        }
        self.state.sync_props(has_next_page, refreshing);
    }
}
