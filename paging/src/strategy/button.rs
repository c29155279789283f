use crate::model::{Edge, LoadTrigger, PagingState};
use crate::state_machine::Suppression;

/// How the explicit "load more" control should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreControl {
    /// Edge the control sits at: after the items in forward mode, before them
    /// in reverse mode.
    pub edge: Edge,
    /// Derived from `is_loading`.
    pub busy: bool,
    pub enabled: bool,
}

/// User-initiated paging through a single control.
#[derive(Debug, Clone, Default)]
pub struct ButtonTrigger;

impl ButtonTrigger {
    pub fn new() -> Self {
        Self
    }

    /// The control is present only while more pages exist.
    pub fn control(&self, state: &PagingState) -> Option<LoadMoreControl> {
        state.has_next_page.then(|| LoadMoreControl {
            edge: state.orientation().arrival_edge(),
            busy: state.is_loading,
            enabled: !state.is_loading,
        })
    }

    /// Activation while busy is a no-op.
    pub fn evaluate(&self, state: &PagingState) -> Result<LoadTrigger, Suppression> {
        state.admits_trigger()?;
        Ok(LoadTrigger::button(state.orientation().arrival_edge()))
    }
}
