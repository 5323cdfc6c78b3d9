//! The uniform result shape every request resolves to.
//!
//! [`ApiResponse`] is a closed two-variant type: a request either succeeded
//! with a body, or failed with a status and an [`Error`] describing why.
//! Failures are values — the client never returns `Err` and never panics,
//! so callers handle every outcome with a single exhaustive `match`.

use serde::de::DeserializeOwned;

use crate::error::{Error, TRANSPORT_ERROR_STATUS};

/// The outcome of an executed request.
///
/// # Type Parameters
///
/// * `T` - The success payload type. Requests resolve to
///   `ApiResponse<String>` (the raw body text); [`decode_json`] re-shapes
///   that into a typed response.
///
/// # Examples
///
/// ```no_run
/// use wicket::{ApiRequest, ApiResponse, Client, UserAgent};
///
/// # async fn example() -> Result<(), wicket::Error> {
/// # let client = Client::builder()
/// #     .user_agent(UserAgent::new("App", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12"))
/// #     .build()?;
/// match client.make_request(ApiRequest::get("https://api.example.com/doc")).await {
///     ApiResponse::Success(body) => println!("body: {body}"),
///     ApiResponse::Failure { status, error } => {
///         eprintln!("request failed ({status}): {error}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`decode_json`]: ApiResponse::decode_json
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// The request completed with HTTP 200 and this payload.
    Success(T),

    /// The request failed.
    ///
    /// `status` is the real HTTP status for protocol failures, or the
    /// reserved `0` sentinel for failures that never reached a valid HTTP
    /// exchange. `error` classifies the cause and carries its context.
    Failure {
        /// HTTP status code, or `0` for transport-class failures.
        status: u16,
        /// What went wrong.
        error: Error,
    },
}

impl<T> ApiResponse<T> {
    /// Folds an error into a `Failure`, deriving the status from the error
    /// kind.
    pub(crate) fn from_error(error: Error) -> Self {
        ApiResponse::Failure {
            status: error.status(),
            error,
        }
    }

    /// Returns `true` for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Consumes the response, returning the success payload if there is one.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Returns the error if the response is a `Failure`.
    pub fn error(&self) -> Option<&Error> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure { error, .. } => Some(error),
        }
    }

    /// Maps the success payload to a different type, preserving failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use wicket::ApiResponse;
    ///
    /// let response: ApiResponse<u32> = ApiResponse::Success(42);
    /// let mapped = response.map(|n| n.to_string());
    /// assert_eq!(mapped.success(), Some("42".to_string()));
    /// ```
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResponse::Success(value) => ApiResponse::Success(f(value)),
            ApiResponse::Failure { status, error } => ApiResponse::Failure { status, error },
        }
    }
}

impl ApiResponse<String> {
    /// Decodes a raw-body response into a typed one.
    ///
    /// A decode failure becomes `Failure { status: 0, Deserialization }`
    /// with the raw body preserved; existing failures pass through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use wicket::ApiResponse;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct Doc {
    ///     id: u64,
    /// }
    ///
    /// let raw = ApiResponse::Success(r#"{"id": 7}"#.to_string());
    /// let typed = raw.decode_json::<Doc>();
    /// assert_eq!(typed.success(), Some(Doc { id: 7 }));
    /// ```
    pub fn decode_json<T: DeserializeOwned>(self) -> ApiResponse<T> {
        match self {
            ApiResponse::Success(body) => match serde_json::from_str(&body) {
                Ok(value) => ApiResponse::Success(value),
                Err(source) => ApiResponse::Failure {
                    status: TRANSPORT_ERROR_STATUS,
                    error: Error::Deserialization { body, source },
                },
            },
            ApiResponse::Failure { status, error } => ApiResponse::Failure { status, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_error_derives_status_from_error_kind() {
        let response: ApiResponse<String> =
            ApiResponse::from_error(Error::ProviderNotConfigured);
        match response {
            ApiResponse::Failure { status, error } => {
                assert_eq!(status, TRANSPORT_ERROR_STATUS);
                assert!(matches!(error, Error::ProviderNotConfigured));
            }
            ApiResponse::Success(_) => panic!("expected Failure"),
        }
    }

    #[test]
    fn decode_json_failure_keeps_raw_body() {
        let raw = ApiResponse::Success("not json".to_string());
        let typed = raw.decode_json::<u32>();

        match typed {
            ApiResponse::Failure { status, error } => {
                assert_eq!(status, TRANSPORT_ERROR_STATUS);
                assert_eq!(error.body(), Some("not json"));
            }
            ApiResponse::Success(_) => panic!("expected Failure"),
        }
    }

    #[test]
    fn decode_json_passes_failures_through() {
        let raw: ApiResponse<String> = ApiResponse::Failure {
            status: 401,
            error: Error::Http {
                status: http::StatusCode::UNAUTHORIZED,
                body: "denied".to_string(),
            },
        };

        let typed = raw.decode_json::<u32>();
        match typed {
            ApiResponse::Failure { status, .. } => assert_eq!(status, 401),
            ApiResponse::Success(_) => panic!("expected Failure"),
        }
    }
}
