/// Default base configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// Directory under the platform config dir that holds user overrides
pub const CONFIG_DIR_NAME: &str = "scrollback";

/// File name looked up in the config dir and the working directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment overrides (`SCROLLBACK__PAGINATION__MODE=button`)
pub const ENV_PREFIX: &str = "SCROLLBACK";

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "scrollback.log";
