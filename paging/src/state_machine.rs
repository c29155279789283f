//! Loading state machine.
//!
//! The phase is derived from [`PagingState`] rather than stored beside it, so
//! every reader sees the latest committed flags:
//!
//! ```text
//!   Idle --trigger--> Loading --settle(more)--> Idle
//!                        |
//!                        +--settle(no more)--> Exhausted
//! ```
//!
//! `Exhausted` is terminal until [`PagingState::reset`].

use crate::model::{LoadTrigger, PagingState};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Idle,
    Loading,
    Exhausted,
}

impl fmt::Display for LoadingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingPhase::Idle => write!(f, "idle"),
            LoadingPhase::Loading => write!(f, "loading"),
            LoadingPhase::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Reason a trigger did not start a fetch. Suppression is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// A fetch is already in flight.
    AlreadyLoading,
    /// No further pages exist.
    Exhausted,
    /// The viewport is farther from the arrival edge than the threshold.
    OutsideThreshold,
    /// The one-shot fill for short initial content was already used.
    InitialFillSpent,
    /// The list view has been disposed.
    Disposed,
    /// The event belongs to the strategy that is not active.
    StrategyMismatch,
}

impl fmt::Display for Suppression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Suppression::AlreadyLoading => "already loading",
            Suppression::Exhausted => "no more pages",
            Suppression::OutsideThreshold => "outside threshold",
            Suppression::InitialFillSpent => "initial fill already used",
            Suppression::Disposed => "list disposed",
            Suppression::StrategyMismatch => "inactive strategy",
        };
        f.write_str(text)
    }
}

/// Result of evaluating a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Fired(LoadTrigger),
    Suppressed(Suppression),
}

impl TriggerOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, TriggerOutcome::Fired(_))
    }
}

impl PagingState {
    pub fn phase(&self) -> LoadingPhase {
        if self.is_loading {
            LoadingPhase::Loading
        } else if !self.has_next_page {
            LoadingPhase::Exhausted
        } else {
            LoadingPhase::Idle
        }
    }

    /// Check whether a trigger could be accepted right now.
    pub fn admits_trigger(&self) -> Result<(), Suppression> {
        match self.phase() {
            LoadingPhase::Idle => Ok(()),
            LoadingPhase::Loading => Err(Suppression::AlreadyLoading),
            LoadingPhase::Exhausted => Err(Suppression::Exhausted),
        }
    }

    /// `Idle -> Loading`. The check and the flip happen in one call so no
    /// other trigger can be accepted in between.
    pub fn begin_load(&mut self) -> Result<(), Suppression> {
        self.admits_trigger()?;
        self.is_loading = true;
        Ok(())
    }

    /// `Loading -> Idle | Exhausted` after a successful fetch.
    pub fn settle(&mut self, has_next_page: bool) -> LoadingPhase {
        if !self.is_loading {
            log::warn!("Settling a list that is not loading (has_next_page={has_next_page})");
        }
        self.is_loading = false;
        self.has_next_page = has_next_page;
        self.phase()
    }

    /// A failed fetch clears the loading flag and leaves `has_next_page`
    /// untouched so the same page can be requested again.
    pub fn settle_failed(&mut self) -> LoadingPhase {
        self.is_loading = false;
        self.phase()
    }

    /// Apply flags pushed by the owning view. Once exhausted, a late
    /// `has_next_page = true` is ignored until [`PagingState::reset`].
    pub fn sync_props(&mut self, has_next_page: bool, refreshing: bool) {
        if self.phase() == LoadingPhase::Exhausted && has_next_page {
            log::debug!("Ignoring has_next_page=true on an exhausted list");
        } else {
            self.has_next_page = has_next_page;
        }
        self.is_loading = refreshing;
    }

    /// Full reset, e.g. when switching to a different conversation.
    pub fn reset(&mut self, has_next_page: bool) {
        self.is_loading = false;
        self.has_next_page = has_next_page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_to_loading() {
        let mut state = PagingState::new(true);
        assert_eq!(state.phase(), LoadingPhase::Idle);
        assert_eq!(state.begin_load(), Ok(()));
        assert_eq!(state.phase(), LoadingPhase::Loading);
    }

    #[test]
    fn test_trigger_while_loading_is_suppressed() {
        let mut state = PagingState::new(true);
        state.begin_load().unwrap();
        assert_eq!(state.begin_load(), Err(Suppression::AlreadyLoading));
        assert!(state.is_loading);
    }

    #[test]
    fn test_settle_with_more_pages_returns_to_idle() {
        let mut state = PagingState::new(true);
        state.begin_load().unwrap();
        assert_eq!(state.settle(true), LoadingPhase::Idle);
    }

    #[test]
    fn test_settle_without_more_pages_exhausts() {
        let mut state = PagingState::new(true);
        state.begin_load().unwrap();
        assert_eq!(state.settle(false), LoadingPhase::Exhausted);
        assert_eq!(state.begin_load(), Err(Suppression::Exhausted));
    }

    #[test]
    fn test_failed_settlement_allows_retry() {
        let mut state = PagingState::new(true);
        state.begin_load().unwrap();
        assert_eq!(state.settle_failed(), LoadingPhase::Idle);
        assert!(state.has_next_page);
        assert_eq!(state.begin_load(), Ok(()));
    }

    #[test]
    fn test_exhausted_ignores_late_has_next_page() {
        let mut state = PagingState::new(true);
        state.begin_load().unwrap();
        state.settle(false);

        state.sync_props(true, false);
        assert_eq!(state.phase(), LoadingPhase::Exhausted);

        state.reset(true);
        assert_eq!(state.phase(), LoadingPhase::Idle);
    }

    #[test]
    fn test_refreshing_prop_marks_loading() {
        let mut state = PagingState::new(true);
        state.sync_props(true, true);
        assert_eq!(state.phase(), LoadingPhase::Loading);
        assert_eq!(state.begin_load(), Err(Suppression::AlreadyLoading));
    }
}
