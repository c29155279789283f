use crate::models::ChatMessage;
use crate::theme::Palette;
use paging::Edge;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};

/// Widest author column before names get cut
const AUTHOR_WIDTH: usize = 6;

/// Screen areas of the history: the bordered message list and the one-row
/// slot for the loader or the load-more control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryAreas {
    pub list: Rect,
    pub affordance: Rect,
}

impl HistoryAreas {
    /// Message rows inside the list's borders
    pub fn viewport_rows(&self) -> u32 {
        u32::from(self.list.height.saturating_sub(2))
    }
}

/// Put the affordance slot at `edge`, above the list in reverse orientation
/// and below it in forward orientation. The slot is always reserved so the
/// viewport does not jump when a loader appears.
pub fn split_history_area(area: Rect, edge: Edge) -> HistoryAreas {
    let slot_height = area.height.min(1);
    let list_height = area.height - slot_height;

    match edge {
        Edge::Top => HistoryAreas {
            affordance: Rect::new(area.x, area.y, area.width, slot_height),
            list: Rect::new(area.x, area.y + slot_height, area.width, list_height),
        },
        Edge::Bottom => HistoryAreas {
            list: Rect::new(area.x, area.y, area.width, list_height),
            affordance: Rect::new(area.x, area.y + list_height, area.width, slot_height),
        },
    }
}

fn pad_author(author: &str) -> String {
    let name: String = author.chars().take(AUTHOR_WIDTH).collect();
    format!("{name:>AUTHOR_WIDTH$}")
}

pub fn format_message(message: &ChatMessage) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", message.time_label()),
            Style::default().fg(Palette::timestamp()),
        ),
        Span::styled(
            pad_author(&message.author),
            Style::default()
                .fg(Palette::author(&message.author))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": "),
        Span::styled(
            message.body.clone(),
            Style::default().fg(Palette::text_primary()),
        ),
    ])
}

pub fn history_title(conversation: u32, loaded: usize, exhausted: bool) -> String {
    if exhausted {
        format!(" Conversation #{} ({loaded}, complete) ", conversation + 1)
    } else {
        format!(" Conversation #{} ({loaded} loaded) ", conversation + 1)
    }
}
