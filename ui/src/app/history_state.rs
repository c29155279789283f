use crate::config::AppConfig;
use crate::config::demo::DemoConfig;
use crate::config::pagination::AffordanceLabels;
use crate::models::ChatMessage;
use crate::services::{DemoHistorySource, HistoryOrder};
use paging::{
    Edge, LoadMoreControl, LoadingPhase, PageLoader, PagedList, PaginationMode, PagingState,
    ScrollMetrics, SettleOutcome, Settlement, TaskPool, TriggerOutcome,
};
use std::ops::Range;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Everything the history view needs from configuration
#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub mode: PaginationMode,
    pub reverse: bool,
    pub threshold: u32,
    pub page_size: u32,
    pub fetch_timeout: Option<Duration>,
    pub labels: AffordanceLabels,
    pub demo: DemoConfig,
}

impl HistorySettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let pagination = config.pagination();
        Self {
            mode: pagination.mode(),
            reverse: pagination.reverse(),
            threshold: pagination.threshold(),
            page_size: pagination.page_size(),
            fetch_timeout: pagination.fetch_timeout(),
            labels: pagination.labels(),
            demo: config.demo().clone(),
        }
    }
}

/// What renders at the arrival edge of the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Scroll mode with a fetch in flight
    Loader(Edge),
    /// Button mode while more history exists
    Control(LoadMoreControl),
    /// Nothing to show; the edge is kept so the layout stays stable
    Empty(Edge),
}

impl Affordance {
    pub fn edge(&self) -> Edge {
        match self {
            Affordance::Loader(edge) | Affordance::Empty(edge) => *edge,
            Affordance::Control(control) => control.edge,
        }
    }
}

/// The paginated history of the current conversation together with the
/// viewport it is shown in.
///
/// Rows and messages map one to one, so the scroll offset is the index of the
/// first visible message.
pub struct HistoryState {
    list: PagedList<ChatMessage>,
    loader: PageLoader<DemoHistorySource>,
    rx: Receiver<Settlement<ChatMessage>>,
    tx: Sender<Settlement<ChatMessage>>,
    pool: TaskPool,
    settings: HistorySettings,
    conversation: u32,
    scroll_offset: u32,
    viewport_rows: u32,
    mounted: bool,
}

impl HistoryState {
    pub fn new(settings: HistorySettings, pool: TaskPool) -> Self {
        let (tx, rx) = mpsc::channel();
        let conversation = 0;
        let loader = Self::build_loader(&settings, conversation, &pool, &tx);
        let list = Self::build_list(&settings);

        Self {
            list,
            loader,
            rx,
            tx,
            pool,
            settings,
            conversation,
            scroll_offset: 0,
            viewport_rows: 0,
            mounted: false,
        }
    }

    fn build_list(settings: &HistorySettings) -> PagedList<ChatMessage> {
        PagedList::new(
            PagingState::new(true)
                .with_reverse(settings.reverse)
                .with_threshold(settings.threshold),
            settings.mode,
        )
    }

    fn build_loader(
        settings: &HistorySettings,
        conversation: u32,
        pool: &TaskPool,
        tx: &Sender<Settlement<ChatMessage>>,
    ) -> PageLoader<DemoHistorySource> {
        let source = DemoHistorySource::from_config(
            conversation,
            HistoryOrder::from_reverse(settings.reverse),
            &settings.demo,
        );
        PageLoader::new(source, pool.clone(), tx.clone(), settings.page_size)
            .with_timeout(settings.fetch_timeout)
    }

    pub fn list(&self) -> &PagedList<ChatMessage> {
        &self.list
    }

    pub fn phase(&self) -> LoadingPhase {
        self.list.phase()
    }

    pub fn mode(&self) -> PaginationMode {
        self.list.mode()
    }

    pub fn conversation(&self) -> u32 {
        self.conversation
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn viewport_rows(&self) -> u32 {
        self.viewport_rows
    }

    pub fn labels(&self) -> &AffordanceLabels {
        &self.settings.labels
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll_offset,
            u32::try_from(self.list.items().len()).unwrap_or(u32::MAX),
            self.viewport_rows,
        )
    }

    /// Indices of the messages inside the viewport
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.list.items().len();
        let start = (self.scroll_offset as usize).min(len);
        let end = (start + self.viewport_rows as usize).min(len);
        start..end
    }

    pub fn affordance(&self) -> Affordance {
        if let Some(edge) = self.list.loader_edge() {
            Affordance::Loader(edge)
        } else if let Some(control) = self.list.control() {
            Affordance::Control(control)
        } else {
            Affordance::Empty(self.list.orientation().arrival_edge())
        }
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.metrics().max_offset());
    }

    /// Record the number of rows the list is drawn in. Once mounted, a
    /// change re-evaluates the scroll trigger since a taller viewport can
    /// bring the edge into range.
    pub fn resize(&mut self, rows: u32) -> Option<TriggerOutcome> {
        if rows == self.viewport_rows {
            return None;
        }
        log::debug!("History viewport resized to {rows} rows");
        self.viewport_rows = rows;
        self.clamp_offset();

        if self.mounted && self.list.mode() == PaginationMode::Scroll {
            Some(self.list.on_scroll(self.metrics(), &mut self.loader))
        } else {
            None
        }
    }

    /// First render of the current conversation
    pub fn mount(&mut self) -> TriggerOutcome {
        self.mounted = true;
        let outcome = self.list.on_mount(self.metrics(), &mut self.loader);
        log::debug!(
            "Mounted conversation {} in {} mode: {outcome:?}",
            self.conversation,
            self.list.mode()
        );
        outcome
    }

    pub fn scroll_to(&mut self, offset: u32) -> TriggerOutcome {
        self.scroll_offset = offset;
        self.clamp_offset();
        self.list.on_scroll(self.metrics(), &mut self.loader)
    }

    pub fn scroll_by(&mut self, delta: i32) -> TriggerOutcome {
        let target = i64::from(self.scroll_offset) + i64::from(delta);
        let target = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        self.scroll_to(target)
    }

    pub fn scroll_to_start(&mut self) -> TriggerOutcome {
        self.scroll_to(0)
    }

    pub fn scroll_to_end(&mut self) -> TriggerOutcome {
        self.scroll_to(self.metrics().max_offset())
    }

    pub fn activate_load_more(&mut self) -> TriggerOutcome {
        self.list.activate_button(&mut self.loader)
    }

    /// Apply every settlement that has arrived since the last call.
    ///
    /// In reverse orientation prepended messages push the content down, so
    /// the offset moves with them and the rows on screen stay put.
    ///
    /// A page that still leaves the arrival edge within the threshold (for
    /// instance one that does not fill the viewport) produces no scroll
    /// event, so scroll mode re-checks the trigger once the batch is applied.
    pub fn drain_settlements(&mut self) -> Vec<SettleOutcome> {
        let mut outcomes = Vec::new();
        let mut applied = false;

        while let Ok(settlement) = self.rx.try_recv() {
            let outcome = self.list.settle(settlement);
            if let SettleOutcome::Applied { added, .. } = outcome {
                if self.list.orientation().is_reverse() {
                    let added = u32::try_from(added).unwrap_or(u32::MAX);
                    self.scroll_offset = self.scroll_offset.saturating_add(added);
                }
                self.clamp_offset();
                applied = true;
            }
            outcomes.push(outcome);
        }

        if applied && self.mounted && self.list.mode() == PaginationMode::Scroll {
            let outcome = self.list.on_scroll(self.metrics(), &mut self.loader);
            log::debug!(
                "Re-checked scroll trigger after page ({} of {} rows filled): {outcome:?}",
                self.list.items().len(),
                self.viewport_rows
            );
        }

        outcomes
    }

    /// Switch to the next conversation: the list is reset and a fresh
    /// source is attached. Fetches still running for the old conversation
    /// settle with a stale generation and are dropped.
    pub fn switch_conversation(&mut self) -> TriggerOutcome {
        self.conversation += 1;
        log::info!("Switching to conversation {}", self.conversation);

        self.settings.reverse = self.list.state().reverse;
        self.loader = Self::build_loader(&self.settings, self.conversation, &self.pool, &self.tx);
        self.list.reset(true);
        self.scroll_offset = 0;
        self.mount()
    }

    /// Whether the attached source serves pages in the order the current
    /// orientation merges them. A toggle only takes effect on the source at
    /// the next conversation switch.
    pub fn order_matches_orientation(&self) -> bool {
        self.settings.reverse == self.list.state().reverse
    }

    pub fn toggle_orientation(&mut self) -> bool {
        let reverse = !self.list.state().reverse;
        self.list.set_reverse(reverse);
        self.clamp_offset();
        log::info!(
            "History orientation is now {}",
            if reverse { "reverse" } else { "forward" }
        );
        reverse
    }

    /// Stop accepting settlements and cancel the fetch in flight; used when
    /// the view is torn down
    pub fn dispose(&mut self) {
        self.list.dispose();
        self.loader.cancel();
    }
}
