use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid page_size: {configured} (min: {min_limit}, max: {max_limit})")]
    PageSize {
        configured: u32,
        min_limit: u32,
        max_limit: u32,
    },
    #[error("Invalid threshold: {configured} (limit: {limit})")]
    Threshold { configured: u32, limit: u32 },
    #[error("Invalid fetch_timeout_ms: {configured} (limit: {limit})")]
    FetchTimeout { configured: u64, limit: u64 },
    #[error("Invalid failure_rate: {configured} (min: {min_limit}, max: {max_limit})")]
    FailureRate {
        configured: f64,
        min_limit: f64,
        max_limit: f64,
    },
    #[error("Invalid task_pool_size: {configured} (min: {min_limit}, max: {max_limit})")]
    TaskPoolSize {
        configured: usize,
        min_limit: usize,
        max_limit: usize,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::PageSize {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Page size out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update pagination.page_size to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::Threshold { configured, limit } => {
                format!(
                    "Load threshold too high!\n\n\
                    Your configured value: {configured} rows\n\
                    Maximum: {limit} rows\n\n\
                    Please update pagination.threshold."
                )
            }
            ConfigValidationError::FetchTimeout { configured, limit } => {
                format!(
                    "Fetch timeout too high!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms (use 0 to wait forever)\n\n\
                    Please update pagination.fetch_timeout_ms."
                )
            }
            ConfigValidationError::FailureRate {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Demo failure rate out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update demo.failure_rate."
                )
            }
            ConfigValidationError::TaskPoolSize {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Task pool size out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update ui.task_pool_size."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    /// Single message suitable for printing before the terminal is taken over
    pub fn error_message(&self) -> Option<String> {
        match self {
            ConfigLoadResult::Success(_) => None,
            ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
                Some(e.clone())
            }
            ConfigLoadResult::ValidationError(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
                Some(format!(
                    "Configuration validation failed:\n\n{}",
                    messages.join("\n\n")
                ))
            }
        }
    }
}
