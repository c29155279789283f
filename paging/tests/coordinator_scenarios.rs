use claims::*;
use paging::{
    Edge, FetchRequest, LoadingPhase, Page, PageRequester, PagedList, PaginationMode,
    PagingState, ScrollMetrics, SettleOutcome, Settlement, Suppression, TriggerOutcome,
    TriggerSource,
};

// Helper modules for coordinator scenario tests
mod helpers {
    use super::*;

    /// Requester that records every fetch it is asked to start
    #[derive(Default)]
    pub struct RecordingRequester {
        pub requests: Vec<FetchRequest>,
    }

    impl PageRequester for RecordingRequester {
        fn request_next_page(&mut self, request: FetchRequest) {
            self.requests.push(request);
        }
    }

    impl RecordingRequester {
        pub fn count(&self) -> usize {
            self.requests.len()
        }
    }

    pub fn scroll_list(reverse: bool) -> PagedList<u32> {
        PagedList::new(
            PagingState::new(true)
                .with_reverse(reverse)
                .with_threshold(250),
            PaginationMode::Scroll,
        )
    }

    pub fn button_list(reverse: bool) -> PagedList<u32> {
        PagedList::new(
            PagingState::new(true).with_reverse(reverse),
            PaginationMode::Button,
        )
    }

    pub fn page(range: std::ops::Range<u32>, next: Option<&str>) -> Page<u32> {
        Page::new(range.collect(), next.map(str::to_string))
    }
}

use helpers::*;

mod scroll_strategy {
    use super::*;

    #[test]
    fn test_forward_scroll_fires_once_within_threshold() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();

        // remaining distance = 2000 - 500 - 1300 = 200 <= 250
        let first = list.on_scroll(ScrollMetrics::new(1300, 2000, 500), &mut requester);
        assert!(first.fired());
        assert_eq!(requester.count(), 1);
        assert_eq!(requester.requests[0].trigger.source, TriggerSource::Scroll);
        assert_eq!(requester.requests[0].trigger.position, Edge::Bottom);

        // Still loading: re-evaluating closer to the edge fires nothing.
        let second = list.on_scroll(ScrollMetrics::new(1310, 2000, 500), &mut requester);
        assert_eq!(second, TriggerOutcome::Suppressed(Suppression::AlreadyLoading));
        assert_eq!(requester.count(), 1);
    }

    #[test]
    fn test_reverse_scroll_fires_near_top_and_loader_renders_above() {
        let mut list = scroll_list(true);
        let mut requester = RecordingRequester::default();

        let far_from_top = list.on_scroll(ScrollMetrics::new(1300, 2000, 500), &mut requester);
        assert_eq!(
            far_from_top,
            TriggerOutcome::Suppressed(Suppression::OutsideThreshold)
        );

        let near_top = list.on_scroll(ScrollMetrics::new(200, 2000, 500), &mut requester);
        assert!(near_top.fired());
        assert_eq!(requester.requests[0].trigger.position, Edge::Top);
        assert_eq!(list.loader_edge(), Some(Edge::Top));
    }

    #[test]
    fn test_loader_hidden_when_idle() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();
        assert_none!(list.loader_edge());

        list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        assert_eq!(list.loader_edge(), Some(Edge::Bottom));

        list.settle(Settlement::success(0, page(0..10, Some("10"))));
        assert_none!(list.loader_edge());
    }

    #[test]
    fn test_short_initial_content_triggers_one_fill() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();
        let short = ScrollMetrics::new(0, 120, 500);

        assert!(list.on_mount(short, &mut requester).fired());
        list.settle(Settlement::success(0, page(0..3, Some("3"))));

        let again = list.on_mount(short, &mut requester);
        assert_eq!(again, TriggerOutcome::Suppressed(Suppression::InitialFillSpent));
        assert_eq!(requester.count(), 1);
    }

    #[test]
    fn test_mount_with_filled_viewport_behaves_like_scroll() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();

        let outcome = list.on_mount(ScrollMetrics::new(0, 2000, 500), &mut requester);
        assert_eq!(outcome, TriggerOutcome::Suppressed(Suppression::OutsideThreshold));
        assert_eq!(requester.count(), 0);
    }

    #[test]
    fn test_no_trigger_after_exhaustion() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();

        list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        let outcome = list.settle(Settlement::success(0, page(0..5, None)));
        assert_eq!(
            outcome,
            SettleOutcome::Applied {
                added: 5,
                phase: LoadingPhase::Exhausted
            }
        );

        for offset in [1500, 1600, 2000] {
            let outcome = list.on_scroll(ScrollMetrics::new(offset, 2000, 500), &mut requester);
            assert_eq!(outcome, TriggerOutcome::Suppressed(Suppression::Exhausted));
        }
        assert_eq!(requester.count(), 1);
    }
}

mod button_strategy {
    use super::*;

    #[test]
    fn test_control_present_and_enabled_when_idle() {
        let list = button_list(false);
        let control = assert_some!(list.control());
        assert!(control.enabled);
        assert!(!control.busy);
        assert_eq!(control.edge, Edge::Bottom);
    }

    #[test]
    fn test_busy_control_ignores_clicks() {
        let mut list = button_list(false);
        let mut requester = RecordingRequester::default();

        assert!(list.activate_button(&mut requester).fired());

        let control = assert_some!(list.control());
        assert!(control.busy);
        assert!(!control.enabled);

        let repeat = list.activate_button(&mut requester);
        assert_eq!(repeat, TriggerOutcome::Suppressed(Suppression::AlreadyLoading));
        assert_eq!(requester.count(), 1);
    }

    #[test]
    fn test_refreshing_prop_makes_control_busy() {
        let mut list = button_list(false);
        let mut requester = RecordingRequester::default();

        list.sync_props(true, true);
        assert!(assert_some!(list.control()).busy);
        assert!(!list.activate_button(&mut requester).fired());
        assert_eq!(requester.count(), 0);
    }

    #[test]
    fn test_reverse_control_precedes_items() {
        let list = button_list(true);
        assert_eq!(assert_some!(list.control()).edge, Edge::Top);
    }

    #[test]
    fn test_control_removed_when_exhausted() {
        let mut list = button_list(false);
        let mut requester = RecordingRequester::default();

        list.activate_button(&mut requester);
        list.settle(Settlement::success(0, page(0..2, None)));

        assert_none!(list.control());
        assert!(!list.activate_button(&mut requester).fired());
    }

    #[test]
    fn test_scroll_events_ignored_in_button_mode() {
        let mut list = button_list(false);
        let mut requester = RecordingRequester::default();

        let outcome = list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        assert_eq!(outcome, TriggerOutcome::Suppressed(Suppression::StrategyMismatch));
        assert_none!(list.loader_edge());
    }
}

mod orientation_policy {
    use super::*;

    #[test]
    fn test_toggling_reverse_keeps_paging_flags() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();
        list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        let before = *list.state();

        list.set_reverse(true);
        assert_eq!(list.state().has_next_page, before.has_next_page);
        assert_eq!(list.state().is_loading, before.is_loading);
        assert_eq!(list.loader_edge(), Some(Edge::Top));

        list.set_reverse(false);
        assert_eq!(list.loader_edge(), Some(Edge::Bottom));
    }

    #[test]
    fn test_reverse_prepends_pages() {
        let mut list = button_list(true);
        let mut requester = RecordingRequester::default();

        list.activate_button(&mut requester);
        list.settle(Settlement::success(0, page(20..30, Some("10"))));
        list.activate_button(&mut requester);
        list.settle(Settlement::success(0, page(10..20, Some("0"))));

        assert_eq!(list.items().first(), Some(&10));
        assert_eq!(list.items().last(), Some(&29));
        assert_eq!(requester.requests[1].cursor.as_deref(), Some("10"));
    }
}

mod settlement_guard {
    use super::*;

    #[test]
    fn test_orphaned_settlement_is_discarded() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();

        list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        let generation = requester.requests[0].generation;
        list.dispose();

        let outcome = list.settle(Settlement::success(generation, page(0..10, Some("10"))));
        assert_eq!(outcome, SettleOutcome::Discarded);
        assert!(list.items().is_empty());
        assert!(list.state().is_loading);
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn test_disposed_list_ignores_triggers() {
        let mut list = button_list(false);
        let mut requester = RecordingRequester::default();
        list.dispose();

        let outcome = list.activate_button(&mut requester);
        assert_eq!(outcome, TriggerOutcome::Suppressed(Suppression::Disposed));
        assert_eq!(requester.count(), 0);
    }

    #[test]
    fn test_reset_reinitializes_exhausted_list() {
        let mut list = scroll_list(false);
        let mut requester = RecordingRequester::default();

        list.on_scroll(ScrollMetrics::new(1500, 2000, 500), &mut requester);
        list.settle(Settlement::success(0, page(0..5, None)));
        assert_eq!(list.phase(), LoadingPhase::Exhausted);

        list.reset(true);
        assert_eq!(list.phase(), LoadingPhase::Idle);
        assert!(
            list.on_mount(ScrollMetrics::new(0, 0, 500), &mut requester)
                .fired()
        );
        assert_eq!(requester.requests[1].generation, 1);
        assert_none!(requester.requests[1].cursor.as_ref());
    }
}
