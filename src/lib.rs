//! # Wicket - An authenticated HTTP convenience layer
//!
//! Wicket is a thin, type-safe layer over `reqwest` for applications that
//! want authenticated requests and a stable response shape without owning
//! any transport policy. Every request resolves to an [`ApiResponse`] —
//! success with a body, or failure with a status and a classified error —
//! so network code is a single exhaustive `match`, never a `panic!` or an
//! escaped exception.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wicket::{ApiRequest, ApiResponse, Client, UserAgent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wicket::Error> {
//!     let client = Client::builder()
//!         .user_agent(UserAgent::new(
//!             "GOV.UK Wallet", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12",
//!         ))
//!         .build()?;
//!
//!     // Plain GET
//!     let response = client
//!         .make_request(ApiRequest::get("https://api.example.com/documents"))
//!         .await;
//!
//!     match response {
//!         ApiResponse::Success(body) => println!("body: {body}"),
//!         ApiResponse::Failure { status, error } => {
//!             eprintln!("request failed ({status}): {error}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authorised requests
//!
//! Protected services are called through
//! [`make_authorised_request`](Client::make_authorised_request): the
//! configured [`AuthenticationProvider`] exchanges an opaque scope for a
//! bearer token, which is appended to the request as
//! `Authorization: Bearer {token}` before dispatch. The token exchange
//! always completes before anything touches the network.
//!
//! ```no_run
//! use wicket::auth::{AuthResponse, AuthenticationProvider};
//! use wicket::{ApiRequest, Client, UserAgent};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct TokenService;
//!
//! #[async_trait]
//! impl AuthenticationProvider for TokenService {
//!     async fn fetch_bearer_token(&self, scope: &str) -> AuthResponse {
//!         // exchange the scope with your identity service here
//!         AuthResponse::Success { bearer_token: format!("token-for-{scope}") }
//!     }
//! }
//!
//! # async fn example() -> Result<(), wicket::Error> {
//! # let client = Client::builder()
//! #     .user_agent(UserAgent::new("App", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12"))
//! #     .build()?;
//! client.set_authentication_provider(Arc::new(TokenService));
//!
//! let response = client
//!     .make_authorised_request(
//!         ApiRequest::get("https://api.example.com/protected"),
//!         "documents.read",
//!     )
//!     .await;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failures are values
//!
//! `make_request` and `make_authorised_request` never return `Err`. A
//! protocol failure keeps its real HTTP status; everything that never
//! reached a valid HTTP exchange — connect failures, a missing
//! authentication provider, a failed token fetch, request
//! misconfiguration — carries the reserved status `0`
//! ([`TRANSPORT_ERROR_STATUS`]), with the [`Error`] variant identifying
//! the actual cause:
//!
//! ```no_run
//! use wicket::{ApiRequest, ApiResponse, Client, Error};
//!
//! # async fn example(client: Client) {
//! match client.make_request(ApiRequest::get("https://api.example.com/doc")).await {
//!     ApiResponse::Success(body) => println!("{body}"),
//!     ApiResponse::Failure { error: Error::Http { status, body }, .. } => {
//!         eprintln!("server said {status}: {body}");
//!     }
//!     ApiResponse::Failure { error: Error::ProviderNotConfigured, .. } => {
//!         eprintln!("set an authentication provider first");
//!     }
//!     ApiResponse::Failure { error, .. } => eprintln!("never reached the server: {error}"),
//! }
//! # }
//! ```
//!
//! ## Features
//!
//! - **Stable response shape** - Every outcome folds into [`ApiResponse`];
//!   exhaustive matching enforced by the compiler
//! - **Bearer-token orchestration** - Pluggable [`AuthenticationProvider`]
//!   capability, token fetched and attached per request
//! - **User-agent tagging** - Deterministic agent string from app, device,
//!   and client metadata, rendered once and cached
//! - **Connectivity predicate** - [`OnlineChecker`](online::OnlineChecker)
//!   over the platform's reported transports, for callers that gate
//!   requests on being online
//! - **Telemetry hooks** - Fire-and-forget
//!   [`PerformanceMonitor`](perf::PerformanceMonitor) metrics and a
//!   caller-supplied [`HttpLogger`](log::HttpLogger) sink
//! - **No transport policy** - Retries, timeouts, and caching stay with
//!   the caller and the underlying engine
//!
//! ## What this layer does not do
//!
//! There are no retries, no backoff, no timeouts, and no response caching
//! here — by design. The underlying `reqwest` client owns connection
//! pooling and TLS; policy above that belongs to the application.

mod client;
mod error;
mod request;
mod response;

pub mod auth;
pub mod log;
pub mod online;
pub mod perf;
pub mod useragent;

pub use auth::{AuthResponse, AuthenticationProvider};
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result, TRANSPORT_ERROR_STATUS};
pub use log::{HttpLogger, NoOpLogger, StdoutLogger};
pub use request::{ApiRequest, ContentType};
pub use response::ApiResponse;
pub use useragent::UserAgent;
