//! # Scrollback UI Library
//!
//! Terminal chat history viewer built on tui-realm, used to exercise the
//! `paging` loading coordinator against a simulated message backend.
//!
//! ## Features
//!
//! - Scroll-triggered or button-triggered history loading
//! - Reverse (newest at the bottom) and forward list orientation
//! - Layered configuration with CLI and environment overrides
//! - Demo backend with configurable latency and failure injection
//!
//! ## Modules
//!
//! - [`app`] - Application model, history state and main loop
//! - [`components`] - UI components and message handling
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`models`] - Chat message data
//! - [`services`] - Simulated history backend
//! - [`theme`] - Colors
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod theme;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;
