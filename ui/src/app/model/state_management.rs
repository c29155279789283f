use super::Model;
use crate::app::history_state::Affordance;
use crate::app::view::main_layout;
use crate::components::common::ComponentId;
use crate::components::history::split_history_area;
use crate::components::load_more_button::LoadMoreButton;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::state::ComponentStateMount;
use crate::components::status_bar::{StatusBar, StatusInfo};
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let edge = self.history.affordance().edge();
        let mut viewport_rows = None;

        self.terminal
            .draw(|f| {
                let layout = main_layout(f.area());
                let areas = split_history_area(layout.history, edge);

                self.app.view(&ComponentId::Header, f, layout.header);
                self.app.view(&ComponentId::History, f, areas.list);
                if self.app.mounted(&ComponentId::LoadingIndicator) {
                    self.app
                        .view(&ComponentId::LoadingIndicator, f, areas.affordance);
                } else if self.app.mounted(&ComponentId::LoadMore) {
                    self.app.view(&ComponentId::LoadMore, f, areas.affordance);
                }
                self.app.view(&ComponentId::StatusBar, f, layout.status);
                self.app.view(&ComponentId::HelpBar, f, layout.help);

                viewport_rows = Some(areas.viewport_rows());
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        if let Some(rows) = viewport_rows {
            self.apply_viewport(rows);
        }
        Ok(())
    }

    pub fn status_info(&self) -> StatusInfo {
        let list = self.history.list();
        StatusInfo {
            conversation: self.history.conversation(),
            phase: list.phase(),
            loaded: list.items().len(),
            mode: list.mode(),
            reverse: list.state().reverse,
            notice: self.notice.clone(),
        }
    }

    pub fn remount_status_bar(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::StatusBar,
                Box::new(StatusBar::new(self.status_info())),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Mount whichever of the loader and the load-more control the list
    /// currently calls for, and unmount the other.
    pub fn sync_affordance(&mut self) -> AppResult<()> {
        match self.history.affordance() {
            Affordance::Loader(_) => {
                self.umount_if_mounted(&ComponentId::LoadMore)?;
                if !self.app.mounted(&ComponentId::LoadingIndicator) {
                    self.app.mount_with_state(
                        ComponentId::LoadingIndicator,
                        LoadingIndicator::new(&self.history.labels().loader),
                        vec![Sub::new(SubEventClause::Tick, SubClause::Always)],
                    )?;
                }
            }
            Affordance::Control(control) => {
                self.umount_if_mounted(&ComponentId::LoadingIndicator)?;
                self.app
                    .remount(
                        ComponentId::LoadMore,
                        Box::new(LoadMoreButton::new(control, self.history.labels())),
                        Vec::default(),
                    )
                    .map_err(|e| AppError::Component(e.to_string()))?;
            }
            Affordance::Empty(_) => {
                self.umount_if_mounted(&ComponentId::LoadingIndicator)?;
                self.umount_if_mounted(&ComponentId::LoadMore)?;
            }
        }
        Ok(())
    }

    fn umount_if_mounted(&mut self, id: &ComponentId) -> AppResult<()> {
        if self.app.mounted(id) {
            self.app
                .umount(id)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        Ok(())
    }
}
