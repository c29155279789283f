use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Header,
    History,
    LoadingIndicator,
    LoadMore,
    StatusBar,
    HelpBar,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    History(HistoryMsg),
    Status(StatusMsg),
}

/// User intents coming from the history view
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HistoryMsg {
    ScrollBy(i32),
    ScrollToStart,
    ScrollToEnd,
    LoadMore,
    SwitchConversation,
    ToggleOrientation,
}

#[derive(Debug, PartialEq)]
pub enum StatusMsg {
    ShowError(AppError),
    ShowWarning(String),
    Clear,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
