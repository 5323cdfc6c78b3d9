//! The authentication provider capability consumed by the client.

use async_trait::async_trait;

/// The outcome of a bearer-token exchange.
#[derive(Debug)]
pub enum AuthResponse {
    /// The provider produced a token for the requested scope.
    Success {
        /// The credential to attach via the `Authorization` header.
        bearer_token: String,
    },

    /// The provider could not produce a token.
    ///
    /// The error is opaque by contract — expired credentials, network
    /// failure, and misconfiguration all surface the same way.
    Failure {
        /// The provider's own error, passed through to the caller unchanged.
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Exchanges an opaque scope string for a bearer token.
///
/// Owned by the host application; the client only holds a shared reference
/// and never manages the provider's lifecycle. Implementations may suspend
/// (token refresh over the network) — the client awaits the exchange to
/// completion before dispatching the request.
///
/// # Examples
///
/// ```
/// use wicket::auth::{AuthResponse, AuthenticationProvider};
/// use async_trait::async_trait;
///
/// struct FixedTokenProvider {
///     token: String,
/// }
///
/// #[async_trait]
/// impl AuthenticationProvider for FixedTokenProvider {
///     async fn fetch_bearer_token(&self, _scope: &str) -> AuthResponse {
///         AuthResponse::Success {
///             bearer_token: self.token.clone(),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Fetches a bearer token valid for the given scope.
    async fn fetch_bearer_token(&self, scope: &str) -> AuthResponse;
}
