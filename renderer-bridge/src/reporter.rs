//! Side channel for failures that must not propagate

use crate::error::BindingError;

/// Receives failures of internally triggered work (e.g. reconciliation on
/// alive) that have no caller to return them to
pub trait ErrorSink: Send + Sync {
    fn report(&self, usn: &str, operation: &'static str, error: &BindingError);
}

/// Default sink: logs through `tracing` at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, usn: &str, operation: &'static str, error: &BindingError) {
        tracing::error!(usn, operation, "{}", error);
    }
}
