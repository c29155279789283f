pub mod demo_history;

pub use demo_history::{DemoHistorySource, HistoryOrder};
