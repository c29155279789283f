//! Application lifecycle management
//!
//! Startup, the main loop and shutdown, kept out of main.rs so the binary
//! only parses arguments.

use crate::app::model::Model;
use crate::components::common::Msg;
use crate::config::{self, ConfigLoadResult, LoadOptions};
use crate::error::AppError;
use crate::logger;

use anyhow::{Context, anyhow};
use log::{debug, error, info};
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Load configuration, start logging and build the model
    pub fn initialize(options: &LoadOptions) -> anyhow::Result<Model<CrosstermTerminalAdapter>> {
        Self::load_configuration(options)?;

        if let Err(e) = logger::setup_logger() {
            eprintln!("Failed to initialize logger: {e}");
        }
        info!("Starting scrollback");

        let model = Model::new().context("Failed to initialize application model")?;
        info!("Model initialized successfully");
        Ok(model)
    }

    /// Configuration errors are printed before the terminal is taken over,
    /// so they stay readable after exit.
    fn load_configuration(options: &LoadOptions) -> anyhow::Result<()> {
        let result = config::init_config(options);
        if let ConfigLoadResult::ValidationError(errors) = result {
            for validation_error in errors {
                eprintln!("Config error: {}", validation_error.user_message());
            }
        }

        match result.error_message() {
            Some(message) => Err(anyhow!("Configuration error: {message}")),
            None => Ok(()),
        }
    }

    /// Setup terminal for application use
    pub fn setup_terminal(model: &mut Model<CrosstermTerminalAdapter>) -> anyhow::Result<()> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| anyhow!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| anyhow!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(model: &mut Model<CrosstermTerminalAdapter>) -> anyhow::Result<()> {
        info!("Entering main application loop");

        while !model.quit {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    /// Process a single iteration of the main loop
    fn process_single_iteration(model: &mut Model<CrosstermTerminalAdapter>) -> anyhow::Result<()> {
        // Settlements first, so a page that arrived during the last poll is
        // on screen before the next key press is handled
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                error!("Application tick error: {err:?}");
                model.error_reporter.report_simple(
                    AppError::Component(err.to_string()),
                    "Application",
                    "tick",
                );
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model);
        Ok(())
    }

    /// Process all received messages
    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    /// Handle view redraw if needed
    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) {
        if model.redraw {
            // Cleared before drawing: the first draw mounts the history and
            // asks for a second pass
            model.set_redraw(false);
            if let Err(e) = model.view() {
                model
                    .error_reporter
                    .report_simple(e, "ViewRendering", "main_loop");
            }
        }
    }

    /// Properly shutdown the application
    pub fn shutdown_application(mut model: Model<CrosstermTerminalAdapter>) -> anyhow::Result<()> {
        info!("Application shutdown initiated");
        if !model.quit {
            model.shutdown();
        }

        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }
}
