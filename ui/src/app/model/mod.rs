use crate::app::history_state::HistoryState;
use crate::components::common::{ComponentId, Msg};
use crate::components::status_bar::StatusNotice;
use crate::error::ErrorReporter;
use paging::TaskPool;
use std::sync::mpsc::{Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod history_updates;
mod initialization;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub taskpool: TaskPool,
    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    /// The paginated history of the current conversation
    pub history: HistoryState,
    /// Last warning or error shown in the status bar
    pub notice: Option<StatusNotice>,

    pub error_reporter: ErrorReporter,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.quit = quit;
    }

    /// Handle messages sent from background tasks and apply finished fetches
    pub fn update_outside_msg(&mut self) {
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }

        self.apply_settlements();
    }

    /// Shutdown the application and clean up resources
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        // Settlements still in flight are dropped from here on
        self.history.dispose();
        self.taskpool.shutdown();

        self.quit = true;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
