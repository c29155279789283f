use crate::components::common::{Msg, StatusMsg};
use paging::PagingError;
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the scrollback terminal interface.
///
/// Fetch failures arrive from the paging core as [`PagingError`] and are
/// converted into [`AppError::Paging`]. Everything else is raised by the
/// terminal layer itself:
///
/// - [`AppError::Component`] - mounting, remounting or drawing a component failed
/// - [`AppError::Config`] - configuration could not be loaded or validated
/// - [`AppError::Channel`] - the main loop's message channel is gone
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Paging(PagingError),

    Component(String),

    Config(String),

    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Paging(err) => write!(f, "Paging Error: {err}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PagingError> for AppError {
    fn from(err: PagingError) -> Self {
        AppError::Paging(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

/// Where an error happened and what the user should be told about it
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Logs errors with their context and forwards them to the main loop, which
/// shows them in the status bar.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation).with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());
        let details = Self::format_additional_context(&context);

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    details
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    details
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    details
                );
            }
        }

        let status_msg = match context.severity {
            ErrorSeverity::Warning => StatusMsg::ShowWarning(Self::format_user_message(&context)),
            ErrorSeverity::Error | ErrorSeverity::Critical => StatusMsg::ShowError(error),
        };
        if let Err(e) = self.tx.send(Msg::Status(status_msg)) {
            log::error!("Failed to send status message: {e}");
        }
    }

    fn format_additional_context(context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("| {}", parts.join(" | "))
        }
    }

    fn format_user_message(context: &ErrorContext) -> String {
        match context.suggestion {
            Some(ref suggestion) => format!("{} ({suggestion})", context.user_message),
            None => context.user_message.clone(),
        }
    }

    // ========== Helper Methods for Common Error Patterns ==========

    pub fn report_mount_error(
        &self,
        component: &str,
        operation: &str,
        error: impl std::fmt::Display,
    ) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// A page fetch settled with an error. The list stays usable, so this is
    /// only a warning.
    pub fn report_fetch_error(&self, error: PagingError) {
        let suggestion = if error.is_transient() {
            "Scroll again or press Enter to retry"
        } else {
            "Press r to reload the conversation"
        };
        let context = ErrorContext::new("History", "load_page")
            .with_message(&format!("Could not load older messages: {error}"))
            .with_suggestion(suggestion)
            .with_severity(ErrorSeverity::Warning);
        self.report(AppError::from(error), context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("TestComponent", "test_operation");
        assert_eq!(context.component, "TestComponent");
        assert_eq!(context.operation, "test_operation");
        assert_eq!(context.severity, ErrorSeverity::Error);
        assert!(context.user_message.contains("TestComponent"));
    }

    #[test]
    fn test_error_context_builder() {
        let context = ErrorContext::new("History", "load_page")
            .with_message("Custom message")
            .with_technical_details("timed out")
            .with_suggestion("Retry")
            .with_severity(ErrorSeverity::Warning);

        assert_eq!(context.user_message, "Custom message");
        assert_eq!(context.technical_details.as_deref(), Some("timed out"));
        assert_eq!(context.suggestion.as_deref(), Some("Retry"));
        assert_eq!(context.severity, ErrorSeverity::Warning);
    }

    #[test]
    fn test_paging_error_conversion() {
        let error: AppError = PagingError::Timeout { millis: 50 }.into();
        assert_eq!(error, AppError::Paging(PagingError::Timeout { millis: 50 }));
        assert!(error.to_string().starts_with("Paging Error"));
    }

    #[test]
    fn test_error_is_forwarded_to_status_bar() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_simple(AppError::Component("boom".into()), "History", "remount");

        match rx.try_recv() {
            Ok(Msg::Status(StatusMsg::ShowError(AppError::Component(msg)))) => {
                assert_eq!(msg, "boom");
            }
            other => panic!("Expected error status message, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_error_is_a_warning() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_fetch_error(PagingError::Fetch("offline".into()));

        match rx.try_recv() {
            Ok(Msg::Status(StatusMsg::ShowWarning(message))) => {
                assert!(message.contains("offline"));
                assert!(message.contains("retry"));
            }
            other => panic!("Expected warning status message, got {other:?}"),
        }
    }

    #[test]
    fn test_report_survives_closed_channel() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let reporter = ErrorReporter::new(tx);
        reporter.report_warning(AppError::Channel("gone".into()), "Main", "send");
    }
}
