//! Trigger strategies.
//!
//! The strategy is chosen once, when the list is built, from a
//! [`PaginationMode`]. Both variants evaluate triggers against the same
//! [`PagingState`] and feed the same contract.

mod button;
mod scroll;

pub use button::{ButtonTrigger, LoadMoreControl};
pub use scroll::ScrollTrigger;

use crate::model::{Edge, LoadTrigger, PagingState, ScrollMetrics};
use crate::state_machine::Suppression;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which strategy a list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    #[default]
    Scroll,
    Button,
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationMode::Scroll => write!(f, "scroll"),
            PaginationMode::Button => write!(f, "button"),
        }
    }
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scroll" => Ok(PaginationMode::Scroll),
            "button" => Ok(PaginationMode::Button),
            other => Err(format!(
                "Unknown pagination mode '{other}', expected 'scroll' or 'button'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PaginationStrategy {
    Scroll(ScrollTrigger),
    Button(ButtonTrigger),
}

impl PaginationStrategy {
    pub fn from_mode(mode: PaginationMode) -> Self {
        match mode {
            PaginationMode::Scroll => PaginationStrategy::Scroll(ScrollTrigger::new()),
            PaginationMode::Button => PaginationStrategy::Button(ButtonTrigger::new()),
        }
    }

    pub fn mode(&self) -> PaginationMode {
        match self {
            PaginationStrategy::Scroll(_) => PaginationMode::Scroll,
            PaginationStrategy::Button(_) => PaginationMode::Button,
        }
    }

    pub fn on_mount(
        &mut self,
        state: &PagingState,
        metrics: ScrollMetrics,
    ) -> Result<LoadTrigger, Suppression> {
        match self {
            PaginationStrategy::Scroll(scroll) => scroll.evaluate_mount(state, metrics),
            PaginationStrategy::Button(_) => Err(Suppression::StrategyMismatch),
        }
    }

    pub fn on_scroll(
        &self,
        state: &PagingState,
        metrics: ScrollMetrics,
    ) -> Result<LoadTrigger, Suppression> {
        match self {
            PaginationStrategy::Scroll(scroll) => scroll.evaluate(state, metrics),
            PaginationStrategy::Button(_) => Err(Suppression::StrategyMismatch),
        }
    }

    pub fn on_activate(&self, state: &PagingState) -> Result<LoadTrigger, Suppression> {
        match self {
            PaginationStrategy::Button(button) => button.evaluate(state),
            PaginationStrategy::Scroll(_) => Err(Suppression::StrategyMismatch),
        }
    }

    pub fn loader_edge(&self, state: &PagingState) -> Option<Edge> {
        match self {
            PaginationStrategy::Scroll(scroll) => scroll.loader_edge(state),
            PaginationStrategy::Button(_) => None,
        }
    }

    pub fn control(&self, state: &PagingState) -> Option<LoadMoreControl> {
        match self {
            PaginationStrategy::Button(button) => button.control(state),
            PaginationStrategy::Scroll(_) => None,
        }
    }

    pub fn reset(&mut self) {
        if let PaginationStrategy::Scroll(scroll) = self {
            scroll.reset();
        }
    }
}
