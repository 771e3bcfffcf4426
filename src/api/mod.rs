// src/api/mod.rs
// =============================================================================
// This module talks to the Udemy instructor API.
//
// Submodules:
// - client: Holds the HTTP client, endpoint and bearer token, decodes JSON
// - pages: Walks paginated responses by following their `next` cursor
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod client;
mod pages;

// Re-export public items from submodules
// This lets users write `api::ApiClient` instead of `api::client::ApiClient`
pub use client::ApiClient;
pub use pages::{fetch_all_pages, Page};
