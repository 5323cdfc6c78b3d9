//! Example demonstrating how failures surface as values.
//!
//! This example shows how to:
//! - Match on the different `Error` kinds behind a `Failure`
//! - Distinguish protocol failures from transport-class failures
//! - Read the preserved upstream body from an HTTP error
//!
//! Run with: `cargo run --example failure_handling`

use wicket::{ApiRequest, ApiResponse, Client, Error, StdoutLogger, UserAgent};

fn describe(response: ApiResponse<String>) {
    match response {
        ApiResponse::Success(body) => println!("success: {body}"),
        ApiResponse::Failure { status, error } => {
            match &error {
                Error::Http { status, body } => {
                    println!("server answered {status} with body {body:?}");
                }
                Error::Network(source) => {
                    println!("request never completed: {source}");
                }
                Error::InvalidUrl(source) => {
                    println!("bad URL: {source}");
                }
                other => println!("other failure: {other}"),
            }
            // Transport-class failures all share the reserved status 0.
            println!("  status field: {status}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("wicket=debug,failure_handling=info")
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
        .logger(StdoutLogger)
        .build()?;

    println!("=== 404 from the server ===");
    let response = client
        .make_request(ApiRequest::get("https://httpbin.org/status/404"))
        .await;
    describe(response);
    println!();

    println!("=== Connection failure ===");
    let response = client
        .make_request(ApiRequest::get("http://127.0.0.1:9"))
        .await;
    describe(response);
    println!();

    println!("=== Invalid URL ===");
    let response = client.make_request(ApiRequest::get("not a url")).await;
    describe(response);

    Ok(())
}
