use paging::PaginationMode;
use tuirealm::props::{Alignment, Color};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use crate::components::common::Msg;

/// Help bar that shows the keyboard shortcuts of the current pagination mode
pub struct HelpBar {
    mode: PaginationMode,
    style: Style,
}

impl HelpBar {
    pub fn new(mode: PaginationMode) -> Self {
        Self {
            mode,
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }

    /// Shortcut/description pairs; `true` marks the key part
    pub fn shortcuts(&self) -> Vec<(&'static str, bool)> {
        let mut shortcuts = vec![
            ("[↑/k]", true),
            (" Up ", false),
            ("[↓/j]", true),
            (" Down ", false),
            ("[PgUp/PgDn]", true),
            (" Page ", false),
            ("[Home/End]", true),
            (" Jump ", false),
        ];

        if self.mode == PaginationMode::Button {
            shortcuts.push(("[Enter/l]", true));
            shortcuts.push((" Load more ", false));
        }

        shortcuts.extend([
            ("[o]", true),
            (" Orientation ", false),
            ("[r]", true),
            (" Next conversation ", false),
            ("[q]", true),
            (" Quit", false),
        ]);
        shortcuts
    }
}

impl MockComponent for HelpBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in self.shortcuts().into_iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }

            if highlight {
                spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
            } else {
                spans.push(Span::raw(text));
            }
        }

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        tuirealm::command::CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for HelpBar {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_more_shortcut_only_in_button_mode() {
        let has_load_more =
            |bar: &HelpBar| bar.shortcuts().iter().any(|(text, _)| *text == "[Enter/l]");

        assert!(has_load_more(&HelpBar::new(PaginationMode::Button)));
        assert!(!has_load_more(&HelpBar::new(PaginationMode::Scroll)));
    }
}
