use crate::components::common::Msg;
use crate::theme::Palette;
use paging::{LoadingPhase, PaginationMode};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

/// Last problem reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusNotice {
    Warning(String),
    Error(String),
}

/// Snapshot of what the status bar shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub conversation: u32,
    pub phase: LoadingPhase,
    pub loaded: usize,
    pub mode: PaginationMode,
    pub reverse: bool,
    pub notice: Option<StatusNotice>,
}

impl StatusInfo {
    pub fn phase_label(&self) -> &'static str {
        match self.phase {
            LoadingPhase::Idle => "idle",
            LoadingPhase::Loading => "loading",
            LoadingPhase::Exhausted => "all loaded",
        }
    }

    pub fn summary(&self) -> String {
        format!(
            " conversation #{} | {} messages | {} | {} mode | {} ",
            self.conversation + 1,
            self.loaded,
            self.phase_label(),
            self.mode,
            if self.reverse { "reverse" } else { "forward" }
        )
    }
}

pub struct StatusBar {
    info: StatusInfo,
}

impl StatusBar {
    pub fn new(info: StatusInfo) -> Self {
        Self { info }
    }

    fn phase_style(&self) -> Style {
        let color = match self.info.phase {
            LoadingPhase::Loading => Palette::status_loading(),
            LoadingPhase::Exhausted => Palette::text_muted(),
            LoadingPhase::Idle => Palette::status_info(),
        };
        Style::default().fg(color)
    }
}

impl MockComponent for StatusBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(self.info.summary(), self.phase_style())];

        match &self.info.notice {
            Some(StatusNotice::Warning(message)) => spans.push(Span::styled(
                format!(" ⚠ {message}"),
                Style::default().fg(Palette::status_warning()),
            )),
            Some(StatusNotice::Error(message)) => spans.push(Span::styled(
                format!(" ✖ {message}"),
                Style::default()
                    .fg(Palette::status_error())
                    .add_modifier(Modifier::BOLD),
            )),
            None => {}
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for StatusBar {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
