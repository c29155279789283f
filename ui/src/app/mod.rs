//! # Application Module
//!
//! Model-view-update wiring for the scrollback terminal application.
//!
//! - [`application_lifecycle`] - startup, main loop and shutdown
//! - [`history_state`] - the paginated history and its viewport, free of any
//!   terminal so it can be driven from tests
//! - [`model`] - the tui-realm model: mounts components and routes messages
//! - [`view`] - screen layout

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Paginated history state and viewport bookkeeping
pub mod history_state;
/// Core application model
pub mod model;
/// Screen layout
pub mod view;
