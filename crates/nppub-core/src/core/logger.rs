use std::fmt;

/// Sink the publish pipeline reports progress through.
pub trait Logger: Send + Sync + fmt::Debug {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing` under the `nppub` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "nppub", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "nppub", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "nppub", "{message}");
    }
}
