use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, FileSourceFile,
    builder::DefaultState,
};
use paging::PaginationMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod defaults;
pub mod demo;
pub mod limits;
pub mod pagination;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Values given on the command line; they win over every other source
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mode: Option<PaginationMode>,
    pub forward: bool,
    pub threshold: Option<u32>,
}

/// Where configuration is read from
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file. Must exist when given.
    pub config_path: Option<PathBuf>,
    pub overrides: CliOverrides,
    /// Skip the per-user and working-directory config files
    pub skip_user_files: bool,
}

impl LoadOptions {
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn isolated(mut self) -> Self {
        self.skip_user_files = true;
        self
    }
}

/// Candidate user config files, lowest priority first
fn user_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join(defaults::CONFIG_DIR_NAME).join(defaults::CONFIG_FILE_NAME));
    }
    files.push(PathBuf::from(defaults::CONFIG_FILE_NAME));
    files
}

fn file_source(path: &Path, required: bool) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}

fn apply_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    overrides: &CliOverrides,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(mode) = overrides.mode {
        builder = builder.set_override("pagination.mode", mode.to_string())?;
    }
    if overrides.forward {
        builder = builder.set_override("pagination.reverse", false)?;
    }
    if let Some(threshold) = overrides.threshold {
        builder = builder.set_override("pagination.threshold", u64::from(threshold))?;
    }
    Ok(builder)
}

fn build_config(options: &LoadOptions) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(File::from_str(
        defaults::DEFAULT_CONFIG,
        FileFormat::Toml,
    ));

    if !options.skip_user_files {
        for path in user_config_files() {
            builder = builder.add_source(file_source(&path, false));
        }
    }

    if let Some(path) = &options.config_path {
        builder = builder.add_source(file_source(path, true));
    }

    // Environment entries override file values when present
    builder = builder.add_source(
        Environment::with_prefix(defaults::ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    apply_overrides(builder, &options.overrides)?.build()
}

/// Load, deserialize and validate configuration from every source
pub fn load_config(options: &LoadOptions) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let config = match build_config(options) {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config file and environment variables."
            ));
        }
    };

    let app_config = match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(e) => {
            return ConfigLoadResult::DeserializeError(format!(
                "Failed to deserialize config: {e}"
            ));
        }
    };

    match app_config.validate() {
        Ok(()) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(errors) => ConfigLoadResult::ValidationError(errors),
    }
}

/// Load configuration once for the whole process. Later calls return the
/// first result regardless of `options`.
pub fn init_config(options: &LoadOptions) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(options))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(&LoadOptions::default()))
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        other => {
            let message = other
                .error_message()
                .unwrap_or_else(|| "unknown configuration error".to_string());
            panic!("Failed to load config: {message}");
        }
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
