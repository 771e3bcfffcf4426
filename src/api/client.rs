// src/api/client.rs
// =============================================================================
// This module owns everything needed to call the Udemy instructor API:
// the HTTP client, the base endpoint URL and the bearer token.
//
// Key functionality:
// - Reads the token from the UDEMY_TOKEN environment variable
// - Sends GET requests with an Authorization: Bearer header
// - Treats any non-success status as an error (no retries)
// - Decodes JSON responses into typed structs, and names the URL in the
//   error when the response does not have the shape we expect
//
// Rust concepts:
// - async functions: For network I/O
// - Generics + trait bounds: get_json works for any Deserialize type
// - Result: For error handling
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// The instructor API root. Every request this tool makes lives under it.
const ENDPOINT: &str = "https://www.udemy.com/instructor-api/v1/";

// Everything a request needs, bundled into one value that gets passed
// around by reference. No globals.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
    token: String,
}

impl ApiClient {
    // Builds a client from the UDEMY_TOKEN environment variable.
    //
    // A missing (or empty) token is the one error this program handles
    // explicitly, so the message tells the user exactly what to set.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("UDEMY_TOKEN").unwrap_or_default();
        if token.is_empty() {
            return Err(anyhow!(
                "Missing token, please set environment variable: UDEMY_TOKEN"
            ));
        }

        Self::with_endpoint(token, ENDPOINT)
    }

    // Builds a client against a custom endpoint.
    //
    // The real program always uses ENDPOINT; tests point this at a local
    // mock server instead so they never touch the network.
    pub fn with_endpoint(token: String, endpoint: &str) -> Result<Self> {
        let base = Url::parse(endpoint)
            .with_context(|| format!("Invalid API endpoint: {}", endpoint))?;

        // One client for the whole run, so connections get reused.
        // 10 second timeout per request, no retries on top.
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base,
            token,
        })
    }

    // Joins a relative path onto the API root.
    //
    // Sources call this to get a Url they can attach query parameters to.
    //
    // Example:
    //   client.url("taught-courses/courses/")
    //   -> https://www.udemy.com/instructor-api/v1/taught-courses/courses/
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("Invalid API path: {}", path))
    }

    // Sends one authenticated GET request and decodes the JSON response.
    //
    // Takes the URL as a string because paginated responses hand us the
    // next page as a ready-made URL string that we follow verbatim.
    //
    // Failure modes (all fatal, none retried):
    // - transport errors from reqwest
    // - any non-success HTTP status
    // - a response body that does not decode into T
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).bearer_auth(&self.token).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            ));
        }

        // Decode by hand instead of response.json() so the error names the
        // URL: a missing field then points at the request that produced it
        let body = response.text().await?;
        serde_json::from_str(&body)
            .with_context(|| format!("Unexpected response shape from {}", url))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is DeserializeOwned?
//    - A serde trait bound meaning "can be deserialized without borrowing
//      from the input"
//    - We need it because the response body is thrown away after decoding,
//      so the decoded value must own all of its data
//
// 2. What does bearer_auth do?
//    - Adds the header `Authorization: Bearer <token>` to the request
//    - This is how the instructor API knows whose courses to return
//
// 3. What is with_context?
//    - An anyhow extension that wraps an error with an extra message
//    - The closure only runs when there actually is an error, so the
//      format! costs nothing on the happy path
//
// 4. Why store a Url for the base but take &str in get_json?
//    - The base is parsed once and joined against many times, so keeping
//      it as a Url catches bad endpoints early
//    - Page cursors arrive as strings from the API and are used as-is
// -----------------------------------------------------------------------------
