//! Error types for the HTTP client layer.
//!
//! This module provides the failure taxonomy behind [`ApiResponse::Failure`].
//! Every error preserves the most useful debugging context it can: raw
//! response bodies for protocol failures, the provider's own error for
//! authentication failures, the underlying `reqwest` error for transport
//! failures.
//!
//! [`ApiResponse::Failure`]: crate::ApiResponse::Failure

use http::StatusCode;

/// Reserved status value for failures that never produced an HTTP response.
///
/// A [`Failure`] carrying this status originated in this layer or below it
/// (provider not configured, provider failure, transport failure) rather
/// than at the remote server. It is distinct from every valid HTTP status
/// code, which all fall in `100..=599`.
///
/// [`Failure`]: crate::ApiResponse::Failure
pub const TRANSPORT_ERROR_STATUS: u16 = 0;

/// The error type carried by [`ApiResponse::Failure`].
///
/// Three different causes share the `0` status sentinel (provider not
/// configured, provider failure, transport failure); the variants keep them
/// distinguishable without string matching.
///
/// # Examples
///
/// ```no_run
/// use wicket::{ApiRequest, ApiResponse, Client, Error, UserAgent};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .user_agent(UserAgent::new("App", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12"))
///     .build()?;
///
/// match client.make_request(ApiRequest::get("https://api.example.com/doc")).await {
///     ApiResponse::Success(body) => println!("Success: {body}"),
///     ApiResponse::Failure { status, error: Error::Http { body, .. } } => {
///         eprintln!("HTTP error {status}: {body}");
///     }
///     ApiResponse::Failure { error, .. } => eprintln!("Other error: {error}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    ///
    /// This wraps the underlying `reqwest::Error` and indicates the request
    /// never completed as an HTTP exchange.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server returned a non-200 HTTP status code.
    ///
    /// The upstream response body is preserved for debugging.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `body` - The raw response body
    #[error("HTTP error {status}: {body}")]
    Http {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        body: String,
    },

    /// An authorised request was attempted before any authentication
    /// provider was set.
    ///
    /// Terminal for that call only; set a provider and retry from the
    /// caller's side.
    #[error("Service Token Provider not initialised")]
    ProviderNotConfigured,

    /// The authentication provider failed to produce a bearer token.
    ///
    /// The provider's error is passed through unchanged as the source.
    #[error("Authentication failed: {0}")]
    Auth(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    ///
    /// Preserves the raw body alongside the serde error, making decode
    /// issues debuggable in production.
    ///
    /// # Fields
    ///
    /// * `body` - The raw response body that failed to decode
    /// * `source` - The underlying serde error
    #[error("Failed to deserialize response body: {source}")]
    Deserialization {
        /// The raw response body that failed to decode
        body: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The request or client was misconfigured.
    ///
    /// Covers cases the transport would otherwise reject at dispatch time,
    /// such as a POST body with no content type.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the status value this error maps to in a `Failure`.
    ///
    /// [`Error::Http`] yields the real upstream status; every other variant
    /// yields the [`TRANSPORT_ERROR_STATUS`] sentinel, because no valid HTTP
    /// exchange produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wicket::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Http {
    ///     status: StatusCode::UNAUTHORIZED,
    ///     body: "expired".to_string(),
    /// };
    /// assert_eq!(err.status(), 401);
    ///
    /// assert_eq!(Error::ProviderNotConfigured.status(), 0);
    /// ```
    pub fn status(&self) -> u16 {
        match self {
            Error::Http { status, .. } => status.as_u16(),
            _ => TRANSPORT_ERROR_STATUS,
        }
    }

    /// Returns `true` if this error never reached a real HTTP exchange.
    ///
    /// Equivalent to `self.status() == TRANSPORT_ERROR_STATUS`.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Error::Http { .. })
    }

    /// Returns the raw upstream response body if this error carries one.
    ///
    /// `Some` for [`Error::Http`] and [`Error::Deserialization`], `None`
    /// otherwise.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Http { body, .. } => Some(body),
            Error::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// A specialized `Result` type for fallible configuration paths.
///
/// Request execution itself never returns `Err` — outcomes are folded into
/// [`ApiResponse`](crate::ApiResponse). This alias serves the builder and
/// other setup code.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_reports_real_status() {
        let err = Error::Http {
            status: StatusCode::NOT_FOUND,
            body: "missing".to_string(),
        };
        assert_eq!(err.status(), 404);
        assert!(!err.is_transport());
        assert_eq!(err.body(), Some("missing"));
    }

    #[test]
    fn non_http_errors_report_sentinel_status() {
        assert_eq!(Error::ProviderNotConfigured.status(), TRANSPORT_ERROR_STATUS);
        assert_eq!(
            Error::Configuration("bad".to_string()).status(),
            TRANSPORT_ERROR_STATUS
        );
        assert!(Error::ProviderNotConfigured.is_transport());
    }

    #[test]
    fn provider_not_configured_message_is_stable() {
        assert_eq!(
            Error::ProviderNotConfigured.to_string(),
            "Service Token Provider not initialised"
        );
    }

    #[test]
    fn auth_error_preserves_provider_error() {
        let provider_error: Box<dyn std::error::Error + Send + Sync> =
            "Failed to get token".into();
        let err = Error::Auth(provider_error);
        assert_eq!(err.to_string(), "Authentication failed: Failed to get token");
        assert_eq!(err.status(), TRANSPORT_ERROR_STATUS);
    }
}
