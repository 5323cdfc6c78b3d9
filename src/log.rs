//! Caller-supplied sink for the client's diagnostic output.

use std::sync::Arc;

/// Receives diagnostic lines emitted while executing requests.
///
/// Implementations must be cheap and must not fail; the client calls this
/// inline on the request path.
pub trait HttpLogger: Send + Sync {
    /// Handles one diagnostic line.
    fn log(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl HttpLogger for NoOpLogger {
    fn log(&self, _message: &str) {}
}

/// Prints every message to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutLogger;

impl HttpLogger for StdoutLogger {
    fn log(&self, message: &str) {
        println!("HttpClient: {message}");
    }
}

impl<L: HttpLogger + ?Sized> HttpLogger for Arc<L> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CollectingLogger {
        messages: Mutex<Vec<String>>,
    }

    impl HttpLogger for CollectingLogger {
        fn log(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn noop_logger_accepts_messages() {
        NoOpLogger.log("this should do nothing");
    }

    #[test]
    fn sink_receives_messages_verbatim() {
        let logger = CollectingLogger {
            messages: Mutex::new(Vec::new()),
        };
        logger.log("adapter test");
        assert_eq!(*logger.messages.lock().unwrap(), vec!["adapter test"]);
    }
}
