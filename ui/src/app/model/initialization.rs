use super::Model;
use crate::app::history_state::{HistorySettings, HistoryState};
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::header::Header;
use crate::components::help_bar::HelpBar;
use crate::components::history::{HistoryView, PaginatedHistory};
use crate::config;
use crate::error::{AppError, AppResult, ErrorReporter};
use paging::{PaginationMode, TaskPool};
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(
        mode: PaginationMode,
        reverse: bool,
    ) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let ui = config::get_config_or_panic().ui();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    ui.input_listener_interval(),
                    ui.input_listener_retries(),
                )
                .poll_timeout(ui.poll_timeout())
                .tick_interval(ui.tick_interval()),
        );

        app.mount(
            ComponentId::Header,
            Box::new(Header::new(mode, reverse)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::History,
            Box::new(PaginatedHistory::new(HistoryView::default())),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::HelpBar,
            Box::new(HelpBar::new(mode)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::default()),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::History)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new() -> AppResult<Self> {
        let config = config::get_config_or_panic();
        let settings = HistorySettings::from_config(config);
        log::info!(
            "Starting history in {} mode ({}), threshold {} rows, page size {}",
            settings.mode,
            if settings.reverse { "reverse" } else { "forward" },
            settings.threshold,
            settings.page_size
        );

        let (tx_to_main, rx_to_main) = mpsc::channel();
        let taskpool = TaskPool::new(config.ui().task_pool_size());
        let error_reporter = ErrorReporter::new(tx_to_main.clone());
        let history = HistoryState::new(settings.clone(), taskpool.clone());

        let mut model = Self {
            app: Self::init_app(settings.mode, settings.reverse)?,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            taskpool,
            tx_to_main,
            rx_to_main,
            history,
            notice: None,
            error_reporter,
        };

        model.refresh_history()?;
        Ok(model)
    }
}
