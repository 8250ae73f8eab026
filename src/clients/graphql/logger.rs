//! Error reporting for GraphQL `errors` payloads.
//!
//! A dispatcher reports each upstream `errors` value exactly once, through
//! the [`ErrorSink`] chosen when it was configured:
//!
//! - [`ErrorSink::Trace`]: a [`TraceLogger`] object, called with the payload
//! - [`ErrorSink::Callable`]: a closure, called with `(Level::ERROR, payload)`
//! - [`ErrorSink::Default`]: a `tracing` event at `TRACE` level

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::Level;

/// A logger object that receives error payloads.
pub trait TraceLogger: Send + Sync {
    /// Records an upstream `errors` payload.
    fn trace(&self, payload: &Value);
}

impl<L: TraceLogger + ?Sized> TraceLogger for Arc<L> {
    fn trace(&self, payload: &Value) {
        (**self).trace(payload);
    }
}

type LogFn = dyn Fn(Level, &Value) + Send + Sync;

/// Destination for upstream error reports.
#[derive(Clone, Default)]
pub enum ErrorSink {
    /// Forward to a [`TraceLogger`].
    Trace(Arc<dyn TraceLogger>),

    /// Forward to a `(level, payload)` closure.
    Callable(Arc<LogFn>),

    /// Emit a `tracing` event.
    #[default]
    Default,
}

impl ErrorSink {
    /// Creates a sink that forwards to `logger`.
    #[must_use]
    pub fn trace_logger(logger: impl TraceLogger + 'static) -> Self {
        Self::Trace(Arc::new(logger))
    }

    /// Creates a sink that calls `log` with `(Level::ERROR, payload)`.
    #[must_use]
    pub fn callable<F>(log: F) -> Self
    where
        F: Fn(Level, &Value) + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(log))
    }

    /// Reports an `errors` payload.
    pub fn report(&self, errors: &Value) {
        match self {
            Self::Trace(logger) => logger.trace(errors),
            Self::Callable(log) => log(Level::ERROR, errors),
            Self::Default => tracing::trace!(%errors, "GraphQL response contained errors"),
        }
    }
}

impl fmt::Debug for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace(_) => f.write_str("ErrorSink::Trace"),
            Self::Callable(_) => f.write_str("ErrorSink::Callable"),
            Self::Default => f.write_str("ErrorSink::Default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        payloads: Mutex<Vec<Value>>,
    }

    impl TraceLogger for Recorder {
        fn trace(&self, payload: &Value) {
            self.payloads.lock().unwrap().push(payload.clone());
        }
    }

    #[test]
    fn test_trace_sink_forwards_payload() {
        let recorder = Arc::new(Recorder::default());
        let sink = ErrorSink::trace_logger(Arc::clone(&recorder));

        sink.report(&json!(["error-code"]));

        assert_eq!(*recorder.payloads.lock().unwrap(), vec![json!(["error-code"])]);
    }

    #[test]
    fn test_callable_sink_receives_error_level() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&calls);
        let sink = ErrorSink::callable(move |level, payload| {
            captured.lock().unwrap().push((level, payload.clone()));
        });

        sink.report(&json!(["error-code"]));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![(Level::ERROR, json!(["error-code"]))]
        );
    }

    #[test]
    fn test_default_sink_does_not_panic_without_subscriber() {
        ErrorSink::default().report(&json!([{"message": "boom"}]));
    }

    #[test]
    fn test_debug_names_variant() {
        assert_eq!(format!("{:?}", ErrorSink::default()), "ErrorSink::Default");
        let sink = ErrorSink::callable(|_, _| {});
        assert_eq!(format!("{:?}", sink), "ErrorSink::Callable");
    }
}
