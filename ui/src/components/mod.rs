// Core components
pub mod common;
pub mod state;

// Display components
pub mod help_bar;
pub mod load_more_button;
pub mod loading_indicator;
pub mod status_bar;
pub mod header;

// Complex components
pub mod history;

// System components
pub mod global_key_watcher;
