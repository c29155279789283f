use paging::PagingError;
use scrollback::components::common::StatusMsg;
use scrollback::error::ErrorReporter;
use scrollback::{AppError, Msg};
use std::sync::mpsc::{self, Receiver};

/// Reporter wired to a channel the test can read
fn reporter() -> (ErrorReporter, Receiver<Msg>) {
    let (tx, rx) = mpsc::channel();
    (ErrorReporter::new(tx), rx)
}

#[test]
fn test_timeout_is_reported_as_retryable_warning() {
    let (reporter, rx) = reporter();

    reporter.report_fetch_error(PagingError::Timeout { millis: 500 });

    match rx.try_recv() {
        Ok(Msg::Status(StatusMsg::ShowWarning(message))) => {
            assert!(message.contains("Could not load older messages"));
            assert!(message.contains("retry"));
        }
        other => panic!("Expected warning, got {other:?}"),
    }
}

#[test]
fn test_component_failure_is_reported_as_error() {
    let (reporter, rx) = reporter();

    reporter.report_simple(
        AppError::Component("remount failed".to_string()),
        "History",
        "remount",
    );

    match rx.try_recv() {
        Ok(Msg::Status(StatusMsg::ShowError(AppError::Component(message)))) => {
            assert_eq!(message, "remount failed");
        }
        other => panic!("Expected error, got {other:?}"),
    }
}

#[test]
fn test_reporting_after_main_loop_exit_does_not_panic() {
    let (reporter, rx) = reporter();
    drop(rx);

    reporter.report_fetch_error(PagingError::Fetch("backend unavailable".to_string()));
}
