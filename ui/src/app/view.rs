use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub history: Rect,
    pub status: Rect,
    pub help: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1), // Header
                Constraint::Min(4),    // History with its affordance row
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Help bar
            ]
            .as_ref(),
        )
        .split(area);

    MainLayout {
        header: chunks[0],
        history: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_takes_remaining_rows() {
        let layout = main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 1);
        // 40 rows minus a margin of 1 on each side
        assert_eq!(layout.history.height, 35);
        assert_eq!(layout.help.y, 38);
    }
}
