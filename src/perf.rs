//! Performance monitoring hooks around request execution.
//!
//! A [`PerformanceMonitor`] is a side-channel observer: the client opens a
//! metric when a request is dispatched, records sizes and status as they
//! become known, and stops the metric when a response arrives. It never
//! alters the request or response seen by the caller, and the trait
//! signatures are infallible so a monitor cannot affect the request
//! outcome.

use http::Method;
use url::Url;

/// Collector of HTTP timing metrics, keyed by URL and method.
pub trait PerformanceMonitor: Send + Sync {
    /// Opens a metric for a request about to be dispatched.
    fn start_metric(&self, url: &Url, method: &Method) -> Box<dyn HttpMetric>;
}

/// One in-flight HTTP metric.
///
/// Field setters may be called in any order before [`stop`](HttpMetric::stop).
/// If the request never produces a response, the metric is dropped without
/// being stopped.
pub trait HttpMetric: Send {
    /// Records the outgoing body size in bytes.
    fn set_request_size(&mut self, bytes: u64);

    /// Records the response body size in bytes.
    fn set_response_size(&mut self, bytes: u64);

    /// Records the numeric HTTP status code.
    fn set_response_code(&mut self, code: u16);

    /// Records the response content type as `type/subtype`.
    fn set_content_type(&mut self, content_type: &str);

    /// Closes the metric.
    fn stop(self: Box<Self>);
}

/// A [`PerformanceMonitor`] that records nothing.
///
/// The builder default when no monitor is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPerformanceMonitor;

impl PerformanceMonitor for NoOpPerformanceMonitor {
    fn start_metric(&self, _url: &Url, _method: &Method) -> Box<dyn HttpMetric> {
        Box::new(NoOpMetric)
    }
}

struct NoOpMetric;

impl HttpMetric for NoOpMetric {
    fn set_request_size(&mut self, _bytes: u64) {}
    fn set_response_size(&mut self, _bytes: u64) {}
    fn set_response_code(&mut self, _code: u16) {}
    fn set_content_type(&mut self, _content_type: &str) {}
    fn stop(self: Box<Self>) {}
}

/// Normalizes a `Content-Type` header value to `type/subtype`.
///
/// Parameters such as `charset` are stripped. Returns `None` for values
/// with an empty type or subtype.
pub(crate) fn normalize_content_type(value: &str) -> Option<String> {
    let essence = value.split(';').next()?.trim();
    let (main, sub) = essence.split_once('/')?;
    if main.is_empty() || sub.is_empty() {
        return None;
    }
    Some(format!("{main}/{sub}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_content_type_to_type_subtype() {
        assert_eq!(
            normalize_content_type("application/json; charset=utf-8"),
            Some("application/json".to_string())
        );
        assert_eq!(
            normalize_content_type("text/plain"),
            Some("text/plain".to_string())
        );
    }

    #[test]
    fn rejects_malformed_content_types() {
        assert_eq!(normalize_content_type("gibberish"), None);
        assert_eq!(normalize_content_type("/json"), None);
        assert_eq!(normalize_content_type("text/"), None);
    }

    #[test]
    fn noop_metric_lifecycle_is_harmless() {
        let monitor = NoOpPerformanceMonitor;
        let url = Url::parse("https://example.com/test").unwrap();
        let mut metric = monitor.start_metric(&url, &Method::GET);
        metric.set_request_size(2);
        metric.set_response_code(200);
        metric.stop();
    }
}
