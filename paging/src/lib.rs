//! # Scrollback Paging Library
//!
//! Loading coordinator for paginated lists such as chat history views.
//! A list view owns its items and paging flags; this library decides when a
//! "load next page" request may fire, prevents duplicate in-flight loads,
//! detects end-of-data and merges loaded pages at the correct edge.
//!
//! Two interchangeable strategies share one paging contract:
//!
//! - scroll-triggered paging fires when the viewport comes within a
//!   threshold of the edge new items arrive at
//! - button-triggered paging exposes an explicit "load more" control
//!
//! ## Modules
//!
//! - [`model`] - Paging state, triggers, scroll metrics and pages
//! - [`state_machine`] - Idle / Loading / Exhausted transitions
//! - [`orientation`] - Forward vs. reverse list orientation policy
//! - [`strategy`] - Scroll and button trigger strategies
//! - [`contract`] - Requester and data source traits
//! - [`list`] - The owning paged list with its settlement guard
//! - [`loader`] - Async page loader delivering settlements over a channel
//! - [`taskpool`] - Bounded, cancellable task pool for fetches
//! - [`errors`] - Fetch failure types

pub mod contract;
pub mod errors;
pub mod list;
pub mod loader;
pub mod model;
pub mod orientation;
pub mod state_machine;
pub mod strategy;
pub mod taskpool;

pub use contract::{PageRequester, PageSource};
pub use errors::PagingError;
pub use list::{ItemList, PagedList, SettleOutcome, Settlement};
pub use loader::PageLoader;
pub use model::{
    Edge, FetchRequest, LoadTrigger, Page, PageRequest, PagingState, ScrollMetrics, TriggerSource,
};
pub use orientation::Orientation;
pub use state_machine::{LoadingPhase, Suppression, TriggerOutcome};
pub use strategy::{
    ButtonTrigger, LoadMoreControl, PaginationMode, PaginationStrategy, ScrollTrigger,
};
pub use taskpool::TaskPool;
