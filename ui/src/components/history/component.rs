use super::event_handling::handle_event;
use super::rendering::format_message;
use crate::components::common::Msg;
use crate::models::ChatMessage;
use crate::theme::Palette;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Alignment, Props};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::Line;
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// Data the history view is remounted with whenever the list changes
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    /// Only the messages inside the viewport, oldest first
    pub visible: Vec<ChatMessage>,
    pub title: String,
    pub scroll_offset: u32,
    pub focused: bool,
    /// Empty-state text shown when there is nothing to list yet
    pub placeholder: Option<String>,
}

/// Scrollable chat history. Key presses turn into scroll or load-more
/// intents; the model owns the list and decides what to fetch.
pub struct PaginatedHistory {
    props: Props,
    view: HistoryView,
    page_rows: u16,
}

impl PaginatedHistory {
    pub fn new(view: HistoryView) -> Self {
        Self {
            props: Props::default(),
            view,
            page_rows: 10,
        }
    }

    /// Rows moved by PageUp/PageDown: the height of the last render
    pub fn page_rows(&self) -> u16 {
        self.page_rows
    }

    pub fn history(&self) -> &HistoryView {
        &self.view
    }
}

impl Component<Msg, NoUserEvent> for PaginatedHistory {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        handle_event(self, ev)
    }
}

impl MockComponent for PaginatedHistory {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        self.page_rows = area.height.saturating_sub(2).max(1);

        let border_color = if self.view.focused {
            Palette::primary_accent()
        } else {
            Palette::text_muted()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(self.view.title.as_str())
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(Palette::title_accent())
                    .add_modifier(Modifier::BOLD),
            );

        let paragraph = match (&self.view.placeholder, self.view.visible.is_empty()) {
            (Some(placeholder), true) => Paragraph::new(Line::from(placeholder.as_str()))
                .style(Style::default().fg(Palette::text_muted()))
                .alignment(Alignment::Center),
            _ => Paragraph::new(
                self.view
                    .visible
                    .iter()
                    .map(format_message)
                    .collect::<Vec<_>>(),
            ),
        };

        frame.render_widget(paragraph.block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if matches!(attr, Attribute::Focus) {
            if let AttrValue::Flag(focused) = value {
                self.view.focused = focused;
            }
        }
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::U32(self.view.scroll_offset))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}
