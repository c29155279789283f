use crate::model::{Edge, LoadTrigger, PagingState, ScrollMetrics};
use crate::state_machine::Suppression;

/// Turns scroll geometry into load triggers.
///
/// Nothing polls: a trigger is evaluated only when the view reports a scroll
/// or a first render.
#[derive(Debug, Clone, Default)]
pub struct ScrollTrigger {
    initial_fill_spent: bool,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a scroll event against the current state.
    pub fn evaluate(
        &self,
        state: &PagingState,
        metrics: ScrollMetrics,
    ) -> Result<LoadTrigger, Suppression> {
        state.admits_trigger()?;

        let edge = state.orientation().threshold_edge();
        let remaining = metrics.remaining_to(edge);
        if remaining > state.threshold {
            return Err(Suppression::OutsideThreshold);
        }

        log::debug!(
            "Scroll within threshold: edge={edge}, remaining={remaining}, threshold={}",
            state.threshold
        );
        Ok(LoadTrigger::scroll(edge))
    }

    /// Evaluate the first render. Content shorter than the viewport produces
    /// no scroll events, so it gets a single fill trigger per list instance.
    pub fn evaluate_mount(
        &mut self,
        state: &PagingState,
        metrics: ScrollMetrics,
    ) -> Result<LoadTrigger, Suppression> {
        if !metrics.is_unfilled() {
            return self.evaluate(state, metrics);
        }
        if self.initial_fill_spent {
            return Err(Suppression::InitialFillSpent);
        }

        state.admits_trigger()?;
        self.initial_fill_spent = true;

        let edge = state.orientation().arrival_edge();
        log::debug!(
            "Content ({}) does not fill viewport ({}), requesting initial fill",
            metrics.content_height,
            metrics.viewport_height
        );
        Ok(LoadTrigger::scroll(edge))
    }

    /// The loader renders at the arrival edge while a fetch is in flight.
    pub fn loader_edge(&self, state: &PagingState) -> Option<Edge> {
        state
            .is_loading
            .then(|| state.orientation().arrival_edge())
    }

    /// Re-arm the initial fill after a list reset.
    pub fn reset(&mut self) {
        self.initial_fill_spent = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_state() -> PagingState {
        PagingState::new(true).with_threshold(250)
    }

    #[test]
    fn test_fires_within_threshold_forward() {
        let trigger = ScrollTrigger::new();
        let result = trigger.evaluate(&forward_state(), ScrollMetrics::new(1300, 2000, 500));
        assert_eq!(result, Ok(LoadTrigger::scroll(Edge::Bottom)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let trigger = ScrollTrigger::new();
        // remaining = 2000 - 500 - 1250 = 250
        let result = trigger.evaluate(&forward_state(), ScrollMetrics::new(1250, 2000, 500));
        assert!(result.is_ok());
    }

    #[test]
    fn test_outside_threshold_forward() {
        let trigger = ScrollTrigger::new();
        let result = trigger.evaluate(&forward_state(), ScrollMetrics::new(1000, 2000, 500));
        assert_eq!(result, Err(Suppression::OutsideThreshold));
    }

    #[test]
    fn test_reverse_measures_top_edge() {
        let trigger = ScrollTrigger::new();
        let state = forward_state().with_reverse(true);

        // Near the bottom means nothing in reverse mode.
        let result = trigger.evaluate(&state, ScrollMetrics::new(1300, 2000, 500));
        assert_eq!(result, Err(Suppression::OutsideThreshold));

        let result = trigger.evaluate(&state, ScrollMetrics::new(100, 2000, 500));
        assert_eq!(result, Ok(LoadTrigger::scroll(Edge::Top)));
    }

    #[test]
    fn test_initial_fill_fires_once() {
        let mut trigger = ScrollTrigger::new();
        let state = forward_state();
        let short = ScrollMetrics::new(0, 100, 500);

        assert!(trigger.evaluate_mount(&state, short).is_ok());
        assert_eq!(
            trigger.evaluate_mount(&state, short),
            Err(Suppression::InitialFillSpent)
        );

        trigger.reset();
        assert!(trigger.evaluate_mount(&state, short).is_ok());
    }

    #[test]
    fn test_initial_fill_respects_exhaustion() {
        let mut trigger = ScrollTrigger::new();
        let state = PagingState::new(false);
        assert_eq!(
            trigger.evaluate_mount(&state, ScrollMetrics::new(0, 0, 500)),
            Err(Suppression::Exhausted)
        );
    }

    #[test]
    fn test_loader_edge_only_while_loading() {
        let trigger = ScrollTrigger::new();
        let mut state = forward_state().with_reverse(true);
        assert_eq!(trigger.loader_edge(&state), None);
        state.is_loading = true;
        assert_eq!(trigger.loader_edge(&state), Some(Edge::Top));
    }
}
