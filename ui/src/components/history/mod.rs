pub mod component;
pub mod event_handling;
pub mod rendering;

pub use component::{HistoryView, PaginatedHistory};
pub use rendering::{HistoryAreas, split_history_area};
