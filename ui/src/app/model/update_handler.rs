use super::Model;
use crate::components::common::{Msg, StatusMsg};
use crate::components::status_bar::StatusNotice;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.redraw = true;

        match msg {
            Msg::AppClose => {
                self.shutdown();
                None
            }
            Msg::ForceRedraw => None,
            Msg::History(msg) => self.update_history(msg),
            Msg::Status(msg) => self.update_status(msg),
        }
    }

    fn update_status(&mut self, msg: StatusMsg) -> Option<Msg> {
        self.notice = match msg {
            StatusMsg::ShowError(error) => Some(StatusNotice::Error(error.to_string())),
            StatusMsg::ShowWarning(message) => Some(StatusNotice::Warning(message)),
            StatusMsg::Clear => None,
        };

        if let Err(e) = self.remount_status_bar() {
            // Reporting would loop back here, so only log
            log::error!("Failed to remount status bar: {e}");
        }
        None
    }
}
