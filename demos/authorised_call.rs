//! Example demonstrating authorised requests through an authentication
//! provider.
//!
//! This example shows how to:
//! - Implement the `AuthenticationProvider` capability
//! - Register the provider on a client
//! - Make a request that carries a bearer token
//!
//! Run with: `cargo run --example authorised_call`

use async_trait::async_trait;
use std::sync::Arc;
use wicket::auth::{AuthResponse, AuthenticationProvider};
use wicket::{ApiRequest, ApiResponse, Client, Error, UserAgent};

/// A provider that would normally exchange the scope with an identity
/// service; here it just mints a fixed token.
struct DemoTokenService;

#[async_trait]
impl AuthenticationProvider for DemoTokenService {
    async fn fetch_bearer_token(&self, scope: &str) -> AuthResponse {
        println!("fetching bearer token for scope {scope:?}");
        AuthResponse::Success {
            bearer_token: "demo-token".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("wicket=debug,authorised_call=info")
        .init();

    let client = Client::builder()
        .user_agent(UserAgent::new(
            "Example App",
            "1.0.0",
            "samsung",
            "SM-G975F",
            31,
            "reqwest",
            "0.12",
        ))
        .build()?;

    // Without a provider, authorised calls fail fast with status 0.
    let response = client
        .make_authorised_request(
            ApiRequest::get("https://httpbin.org/bearer"),
            "documents.read",
        )
        .await;
    if let ApiResponse::Failure { status, error } = response {
        println!("before registering a provider: ({status}) {error}");
    }

    client.set_authentication_provider(Arc::new(DemoTokenService));

    // httpbin.org/bearer echoes the token it received.
    let response = client
        .make_authorised_request(
            ApiRequest::get("https://httpbin.org/bearer"),
            "documents.read",
        )
        .await;

    match response {
        ApiResponse::Success(body) => println!("authorised response: {body}"),
        ApiResponse::Failure { status, error } => {
            eprintln!("authorised request failed ({status}): {error}");
        }
    }

    Ok(())
}
