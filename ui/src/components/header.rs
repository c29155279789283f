use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    props::{Alignment, Color, TextModifiers},
};

use crate::components::common::Msg;
use crate::theme::Palette;
use paging::PaginationMode;

/// Title row naming the loading mode and which end of the history is newest
#[derive(MockComponent)]
pub struct Header {
    component: Label,
}

impl Header {
    pub fn new(mode: PaginationMode, reverse: bool) -> Self {
        let component = Label::default()
            .text(Self::title(mode, reverse))
            .alignment(Alignment::Center)
            .foreground(Palette::title_accent())
            .background(Color::Reset)
            .modifiers(TextModifiers::BOLD);

        Self { component }
    }

    pub fn title(mode: PaginationMode, reverse: bool) -> String {
        let newest = if reverse { "newest at bottom" } else { "newest at top" };
        format!("scrollback | {mode} paging | {newest}")
    }
}

impl Component<Msg, NoUserEvent> for Header {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
