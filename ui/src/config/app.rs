use super::{
    LoggingConfig, demo::DemoConfig, limits::*, pagination::PaginationConfig, ui::UIConfig,
    validation::ConfigValidationError,
};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pagination: PaginationConfig,
    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    demo: DemoConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let page_size = self.pagination.page_size();
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            errors.push(ConfigValidationError::PageSize {
                configured: page_size,
                min_limit: MIN_PAGE_SIZE,
                max_limit: MAX_PAGE_SIZE,
            });
        }

        if self.pagination.threshold() > MAX_THRESHOLD_ROWS {
            errors.push(ConfigValidationError::Threshold {
                configured: self.pagination.threshold(),
                limit: MAX_THRESHOLD_ROWS,
            });
        }

        if self.pagination.fetch_timeout_ms() > MAX_FETCH_TIMEOUT_MS {
            errors.push(ConfigValidationError::FetchTimeout {
                configured: self.pagination.fetch_timeout_ms(),
                limit: MAX_FETCH_TIMEOUT_MS,
            });
        }

        // NaN fails the range check too
        let failure_rate = self.demo.failure_rate();
        if !(MIN_FAILURE_RATE..=MAX_FAILURE_RATE).contains(&failure_rate) {
            errors.push(ConfigValidationError::FailureRate {
                configured: failure_rate,
                min_limit: MIN_FAILURE_RATE,
                max_limit: MAX_FAILURE_RATE,
            });
        }

        let pool_size = self.ui.task_pool_size();
        if !(MIN_TASK_POOL_SIZE..=MAX_TASK_POOL_SIZE).contains(&pool_size) {
            errors.push(ConfigValidationError::TaskPoolSize {
                configured: pool_size,
                min_limit: MIN_TASK_POOL_SIZE,
                max_limit: MAX_TASK_POOL_SIZE,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn demo(&self) -> &DemoConfig {
        &self.demo
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
