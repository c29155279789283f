use clap::Parser;
use paging::PaginationMode;
use scrollback::app::application_lifecycle::ApplicationLifecycle;
use scrollback::config::{CliOverrides, LoadOptions};
use std::path::PathBuf;

/// Browse a simulated chat history with paginated loading
#[derive(Parser, Debug)]
#[command(name = "scrollback", version, about)]
struct Cli {
    /// Configuration file to load on top of the defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How older pages are requested
    #[arg(short, long, value_enum)]
    mode: Option<CliMode>,

    /// Show the oldest message first and load toward the bottom
    #[arg(long)]
    forward: bool,

    /// Rows from the edge at which scroll mode starts loading
    #[arg(short, long)]
    threshold: Option<u32>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum CliMode {
    Scroll,
    Button,
}

impl From<CliMode> for PaginationMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Scroll => PaginationMode::Scroll,
            CliMode::Button => PaginationMode::Button,
        }
    }
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        let options = LoadOptions::default().with_overrides(CliOverrides {
            mode: self.mode.map(PaginationMode::from),
            forward: self.forward,
            threshold: self.threshold,
        });
        match &self.config {
            Some(path) => options.with_config_path(path),
            None => options,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut model = ApplicationLifecycle::initialize(&cli.load_options())?;
    ApplicationLifecycle::setup_terminal(&mut model)?;

    let result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    result
}
