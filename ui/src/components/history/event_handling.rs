use super::component::PaginatedHistory;
use crate::components::common::{HistoryMsg, Msg};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Event, NoUserEvent};

pub fn handle_event(history: &mut PaginatedHistory, ev: Event<NoUserEvent>) -> Option<Msg> {
    let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
        return None;
    };
    if modifiers != KeyModifiers::NONE && modifiers != KeyModifiers::SHIFT {
        return None;
    }

    let page = i32::from(history.page_rows());
    let msg = match code {
        Key::Up | Key::Char('k') => HistoryMsg::ScrollBy(-1),
        Key::Down | Key::Char('j') => HistoryMsg::ScrollBy(1),
        Key::PageUp => HistoryMsg::ScrollBy(-page),
        Key::PageDown => HistoryMsg::ScrollBy(page),
        Key::Home | Key::Char('g') => HistoryMsg::ScrollToStart,
        Key::End | Key::Char('G') => HistoryMsg::ScrollToEnd,
        Key::Enter | Key::Char('l') => HistoryMsg::LoadMore,
        Key::Char('r') => HistoryMsg::SwitchConversation,
        Key::Char('o') => HistoryMsg::ToggleOrientation,
        _ => return None,
    };

    Some(Msg::History(msg))
}
