//! Basic example demonstrating simple GET and POST requests.
//!
//! This example shows how to:
//! - Create a client with a user agent
//! - Make GET requests and match on the response
//! - Make POST requests with a JSON body
//! - Decode a raw response into a typed value
//!
//! Run with: `cargo run --example basic_call`

use serde::{Deserialize, Serialize};
use wicket::{ApiRequest, ApiResponse, Client, ContentType, Error, UserAgent};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Post {
    #[serde(rename = "userId")]
    user_id: u32,
    id: u32,
    title: String,
    body: String,
}

#[derive(Debug, Serialize)]
struct NewPost {
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u32,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("wicket=debug,basic_call=info")
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

    println!("=== GET Request Example ===");
    let response = client
        .make_request(ApiRequest::get(
            "https://jsonplaceholder.typicode.com/posts/1",
        ))
        .await
        .decode_json::<Post>();

    match response {
        ApiResponse::Success(post) => {
            println!("Post ID: {}", post.id);
            println!("Title: {}", post.title);
            println!("Body: {}", post.body);
        }
        ApiResponse::Failure { status, error } => {
            eprintln!("GET failed ({status}): {error}");
        }
    }
    println!();

    println!("=== POST Request Example ===");
    let new_post = NewPost {
        title: "My New Post".to_string(),
        body: "This is the content of my new post!".to_string(),
        user_id: 1,
    };

    let response = client
        .make_request(ApiRequest::post(
            "https://jsonplaceholder.typicode.com/posts",
            Some(new_post),
            Some(ContentType::ApplicationJson),
        ))
        .await;

    match response {
        ApiResponse::Success(body) => println!("Server replied: {body}"),
        ApiResponse::Failure { status, error } => {
            // JSONPlaceholder answers 201 to creations; this layer treats
            // anything other than 200 as a protocol failure.
            println!("Non-200 response ({status}): {error}");
        }
    }

    Ok(())
}
