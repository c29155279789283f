use super::Model;
use crate::components::common::{ComponentId, HistoryMsg, Msg};
use crate::components::header::Header;
use crate::components::history::rendering::history_title;
use crate::components::history::{HistoryView, PaginatedHistory};
use crate::app::history_state::HistoryState;
use crate::components::status_bar::StatusNotice;
use crate::error::{AppError, AppResult};
use paging::{LoadingPhase, PaginationMode, SettleOutcome, TriggerOutcome};
use tuirealm::terminal::TerminalAdapter;

/// Shown while the loaded pages follow the previous orientation
pub const REORDER_NOTICE: &str =
    "New pages follow the new orientation; press r to reload in order";

/// Warning kept on screen while the loaded pages and the orientation
/// disagree about which end is newest
pub fn orientation_notice(history: &HistoryState) -> Option<StatusNotice> {
    (!history.order_matches_orientation())
        .then(|| StatusNotice::Warning(REORDER_NOTICE.to_string()))
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_history(&mut self, msg: HistoryMsg) -> Option<Msg> {
        let outcome = match msg {
            HistoryMsg::ScrollBy(delta) => Some(self.history.scroll_by(delta)),
            HistoryMsg::ScrollToStart => Some(self.history.scroll_to_start()),
            HistoryMsg::ScrollToEnd => Some(self.history.scroll_to_end()),
            HistoryMsg::LoadMore => Some(self.history.activate_load_more()),
            HistoryMsg::SwitchConversation => {
                let outcome = self.history.switch_conversation();
                self.notice = orientation_notice(&self.history);
                Some(outcome)
            }
            HistoryMsg::ToggleOrientation => {
                self.history.toggle_orientation();
                self.notice = orientation_notice(&self.history);
                None
            }
        };

        if let Some(outcome) = outcome {
            log_trigger(msg, outcome);
        }

        self.refresh_or_report();
        None
    }

    /// Apply finished fetches. A failed fetch has already cleared the
    /// loading flag, so it is only reported.
    pub fn apply_settlements(&mut self) {
        let outcomes = self.history.drain_settlements();
        if outcomes.is_empty() {
            return;
        }

        for outcome in outcomes {
            match outcome {
                SettleOutcome::Applied { added, phase } => {
                    log::info!("Loaded {added} messages, history is now {phase}");
                    self.notice = orientation_notice(&self.history);
                }
                SettleOutcome::Failed(error) => self.error_reporter.report_fetch_error(error),
                SettleOutcome::Discarded => {
                    log::debug!("Dropped a settlement for a previous conversation");
                }
            }
        }

        self.refresh_or_report();
        self.redraw = true;
    }

    /// Track the height the list was drawn with. The first non-empty draw
    /// mounts the history, which may start the initial fill.
    pub fn apply_viewport(&mut self, rows: u32) {
        let resized = rows != self.history.viewport_rows();

        if let Some(outcome) = self.history.resize(rows) {
            log::debug!("Resize re-evaluated the scroll trigger: {outcome:?}");
        }
        let mounted = !self.history.is_mounted() && rows > 0;
        if mounted {
            self.history.mount();
        }

        if resized || mounted {
            self.refresh_or_report();
            self.redraw = true;
        }
    }

    /// Remount every component that shows history state
    pub fn refresh_history(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::History,
                Box::new(PaginatedHistory::new(self.history_view())),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.app
            .remount(
                ComponentId::Header,
                Box::new(Header::new(
                    self.history.mode(),
                    self.history.list().state().reverse,
                )),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.sync_affordance()?;
        self.remount_status_bar()?;

        if self.app.active(&ComponentId::History).is_err() {
            log::warn!("Could not focus the history after remount");
        }
        Ok(())
    }

    fn refresh_or_report(&mut self) {
        if let Err(e) = self.refresh_history() {
            self.error_reporter.report_mount_error("History", "remount", e);
        }
    }

    fn history_view(&self) -> HistoryView {
        let list = self.history.list();
        let visible = list.items().as_slice()[self.history.visible_range()].to_vec();
        let placeholder = match (list.items().is_empty(), list.phase(), list.mode()) {
            (true, LoadingPhase::Exhausted, _) => Some("No messages in this conversation"),
            (true, LoadingPhase::Idle, PaginationMode::Button) => {
                Some("Press Enter to load messages")
            }
            _ => None,
        };

        HistoryView {
            visible,
            title: history_title(
                self.history.conversation(),
                list.items().len(),
                list.phase() == LoadingPhase::Exhausted,
            ),
            scroll_offset: self.history.scroll_offset(),
            focused: true,
            placeholder: placeholder.map(str::to_string),
        }
    }
}

fn log_trigger(msg: HistoryMsg, outcome: TriggerOutcome) {
    match outcome {
        TriggerOutcome::Fired(trigger) => log::info!("{msg:?} requested the next page ({trigger})"),
        TriggerOutcome::Suppressed(reason) => log::debug!("{msg:?} did not load: {reason}"),
    }
}
