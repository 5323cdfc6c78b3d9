//! HTTP client orchestration: authentication, execution, outcome mapping.
//!
//! The [`Client`] type is the main entry point. Use [`ClientBuilder`] to
//! configure and create clients.

use crate::auth::{AuthResponse, AuthenticationProvider};
use crate::log::{HttpLogger, NoOpLogger};
use crate::perf::{normalize_content_type, NoOpPerformanceMonitor, PerformanceMonitor};
use crate::request::{ApiRequest, ContentType};
use crate::response::ApiResponse;
use crate::useragent::UserAgent;
use crate::{Error, Result};
use http::StatusCode;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use url::Url;

/// An HTTP client that resolves every request to an [`ApiResponse`].
///
/// The client wraps a `reqwest` transport and adds bearer-token
/// orchestration, user-agent tagging, diagnostic logging, and performance
/// metric hooks. It is designed to be created once and reused — cloning is
/// cheap (the transport and its connection pool are shared), and a clone
/// may be used concurrently from multiple tasks.
///
/// The client has two observable states: unauthenticated (no provider set,
/// authorised calls fail immediately) and authenticated (provider set).
/// Only the forward transition exists, via
/// [`set_authentication_provider`](Client::set_authentication_provider).
///
/// # Examples
///
/// ```no_run
/// use wicket::{ApiRequest, ApiResponse, Client, UserAgent};
///
/// # async fn example() -> Result<(), wicket::Error> {
/// let client = Client::builder()
///     .user_agent(UserAgent::new(
///         "GOV.UK Wallet", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12",
///     ))
///     .build()?;
///
/// match client.make_request(ApiRequest::get("https://api.example.com/doc")).await {
///     ApiResponse::Success(body) => println!("body: {body}"),
///     ApiResponse::Failure { status, error } => eprintln!("failed ({status}): {error}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    logger: Box<dyn HttpLogger>,
    performance_monitor: Box<dyn PerformanceMonitor>,
    authentication_provider: RwLock<Option<Arc<dyn AuthenticationProvider>>>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Executes an unauthenticated request.
    ///
    /// Never returns `Err` and never panics; the three possible outcomes
    /// map onto [`ApiResponse`] as:
    ///
    /// * HTTP 200 → `Success` with the response body text;
    /// * any other status → `Failure` with that status and the upstream
    ///   body preserved in the error;
    /// * no HTTP exchange at all (connect failure, invalid URL, body
    ///   serialization failure, missing content type) → `Failure` with
    ///   the reserved status `0`.
    ///
    /// Use [`ApiResponse::decode_json`] on the result for typed access to
    /// JSON bodies.
    pub async fn make_request<B: Serialize>(&self, request: ApiRequest<B>) -> ApiResponse<String> {
        let method = request.method();
        let url = request.url().to_string();

        match self.execute(request).await {
            Ok(body) => ApiResponse::Success(body),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    method = %method,
                    url = %url,
                    "Request failed"
                );
                self.inner
                    .logger
                    .log(&format!("Non-success response received: {error}"));
                ApiResponse::from_error(error)
            }
        }
    }

    /// Executes a request against a protected service.
    ///
    /// The configured [`AuthenticationProvider`] is asked to exchange
    /// `scope` for a bearer token; the exchange completes (or fails) before
    /// anything is dispatched. On success the request is re-issued through
    /// [`make_request`](Client::make_request) with
    /// `Authorization: Bearer {token}` appended to its headers.
    ///
    /// Failure outcomes, all with the reserved status `0` and zero
    /// transport calls:
    ///
    /// * no provider configured → [`Error::ProviderNotConfigured`];
    /// * provider returned a failure → [`Error::Auth`] wrapping the
    ///   provider's error unchanged.
    pub async fn make_authorised_request<B: Serialize>(
        &self,
        request: ApiRequest<B>,
        scope: &str,
    ) -> ApiResponse<String> {
        let provider = self.current_provider();

        let Some(provider) = provider else {
            tracing::warn!(scope = %scope, "Authorised request with no provider configured");
            return ApiResponse::from_error(Error::ProviderNotConfigured);
        };

        match provider.fetch_bearer_token(scope).await {
            AuthResponse::Failure { error } => {
                tracing::warn!(scope = %scope, error = %error, "Bearer token fetch failed");
                ApiResponse::from_error(Error::Auth(error))
            }
            AuthResponse::Success { bearer_token } => {
                self.make_request(request.with_bearer_token(&bearer_token))
                    .await
            }
        }
    }

    /// Prepares the client for authorised requests.
    ///
    /// Replaces any previously set provider. Setting the same provider
    /// again is a no-op in observable behavior. Intended to be called once
    /// at startup — replacing the provider while authorised requests are in
    /// flight leaves each request on whichever provider it already
    /// resolved.
    pub fn set_authentication_provider(&self, provider: Arc<dyn AuthenticationProvider>) {
        let mut slot = match self.inner.authentication_provider.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(provider);
    }

    /// Clones the provider reference out of the slot.
    ///
    /// The guard is released before any await point.
    fn current_provider(&self) -> Option<Arc<dyn AuthenticationProvider>> {
        let slot = match self.inner.authentication_provider.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone()
    }

    /// Builds, dispatches, and reads one request, mapping every outcome
    /// into [`Error`].
    async fn execute<B: Serialize>(&self, api_request: ApiRequest<B>) -> Result<String> {
        let method = api_request.method();
        let parsed_url = Url::parse(api_request.url())?;

        let builder = match api_request {
            ApiRequest::Get {
                headers,
                query_params,
                ..
            } => {
                let mut url = parsed_url;
                for (key, value) in &query_params {
                    url.query_pairs_mut().append_pair(key, value);
                }
                apply_headers(self.inner.http_client.get(url), &headers)
            }

            ApiRequest::Post {
                body,
                headers,
                content_type,
                ..
            } => {
                let mut builder = self.inner.http_client.post(parsed_url);
                if let Some(body) = body {
                    match content_type {
                        Some(ContentType::ApplicationJson) => {
                            let json = serde_json::to_value(&body)?;
                            builder = builder.json(&json);
                        }
                        None => {
                            return Err(Error::Configuration(
                                "POST body supplied without a content type".to_string(),
                            ));
                        }
                    }
                }
                apply_headers(builder, &headers)
            }

            ApiRequest::FormUrlEncoded {
                headers, params, ..
            } => apply_headers(self.inner.http_client.post(parsed_url).form(&params), &headers),
        };

        let request = builder.build()?;
        let url = request.url().clone();

        tracing::debug!(method = %method, url = %url, "Executing HTTP request");
        self.inner.logger.log(&format!("REQUEST: {method} {url}"));

        let mut metric = self.inner.performance_monitor.start_metric(&url, &method);
        if let Some(length) = request
            .body()
            .and_then(|body| body.as_bytes())
            .map(|bytes| bytes.len() as u64)
        {
            metric.set_request_size(length);
        }

        let response = self.inner.http_client.execute(request).await?;

        let status = response.status();
        metric.set_response_code(status.as_u16());
        if let Some(length) = response.content_length() {
            metric.set_response_size(length);
        }
        if let Some(content_type) = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(normalize_content_type)
        {
            metric.set_content_type(&content_type);
        }
        metric.stop();

        tracing::info!(
            status = status.as_u16(),
            method = %method,
            url = %url,
            "Received HTTP response"
        );
        self.inner
            .logger
            .log(&format!("RESPONSE: {status} {method} {url}"));

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http { status, body });
        }

        Ok(response.text().await?)
    }
}

/// Appends the ordered header pairs to the request.
///
/// Appending preserves duplicates; two headers with the same name are both
/// transmitted.
fn apply_headers(
    mut builder: reqwest::RequestBuilder,
    headers: &[(String, String)],
) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use wicket::{Client, StdoutLogger, UserAgent};
///
/// # fn example() -> Result<(), wicket::Error> {
/// let client = Client::builder()
///     .user_agent(UserAgent::new(
///         "GOV.UK Wallet", "1.0.0", "samsung", "SM-G975F", 31, "reqwest", "0.12",
///     ))
///     .logger(StdoutLogger)
///     .build()?;
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    user_agent: Option<UserAgent>,
    logger: Box<dyn HttpLogger>,
    performance_monitor: Box<dyn PerformanceMonitor>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with a no-op logger and no-op
    /// performance monitor.
    pub fn new() -> Self {
        Self {
            user_agent: None,
            logger: Box::new(NoOpLogger),
            performance_monitor: Box::new(NoOpPerformanceMonitor),
        }
    }

    /// Sets the user agent rendered into every request. Required.
    pub fn user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Sets the diagnostic log sink.
    pub fn logger(mut self, logger: impl HttpLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Sets the performance monitor observing each exchange.
    pub fn performance_monitor(mut self, monitor: impl PerformanceMonitor + 'static) -> Self {
        self.performance_monitor = Box::new(monitor);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no user agent was provided or
    /// the underlying transport fails to initialise.
    pub fn build(self) -> Result<Client> {
        let user_agent = self
            .user_agent
            .ok_or_else(|| Error::Configuration("User agent is required".to_string()))?;

        let http_client = reqwest::Client::builder()
            .user_agent(user_agent.agent_string())
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                logger: self.logger,
                performance_monitor: self.performance_monitor,
                authentication_provider: RwLock::new(None),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
