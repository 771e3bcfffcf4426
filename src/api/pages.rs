// src/api/pages.rs
// =============================================================================
// This module walks paginated API responses.
//
// How the instructor API paginates:
// - Every list endpoint returns `{"results": [...], "next": <url or null>}`
// - `next` is a complete URL, query string included, pointing at the
//   following page - or null/absent on the last page
//
// So the walk is simple: fetch, append the results, follow `next` exactly
// as given, stop when there is no `next`. One request per page, strictly
// in sequence, no retries.
//
// Rust concepts:
// - Generics: Page<T> and fetch_all_pages work for any item type
// - while let: Loop as long as there is another page to fetch
// - Option<T>: Models the "maybe there is a next page" cursor
// =============================================================================

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::client::ApiClient;

// One page of API results.
//
// #[serde(default)] on `next` accepts both `"next": null` and a response
// where the key is missing entirely - either means "last page".
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

// Fetches every page starting from `first_url` and returns all items,
// in page order, with item order preserved inside each page.
//
// Items are appended exactly as the API sends them - if the same record
// shows up on two pages, it ends up in the result twice. Deduplication is
// the server's job, not ours.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    client: &ApiClient,
    first_url: Url,
) -> Result<Vec<T>> {
    let mut items = Vec::new();

    // The cursor starts at the first page and then follows whatever URL
    // the previous response handed us
    let mut next = Some(first_url.to_string());

    while let Some(url) = next {
        let page: Page<T> = client.get_json(&url).await?;
        items.extend(page.results);
        next = page.next;
    }

    Ok(items)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Page<T> generic?
//    - Courses, questions and discussions all paginate the same way, only
//      the item shape differs
//    - One generic struct means one pagination loop for all three
//
// 2. What does #[serde(default)] do?
//    - If the key is missing from the JSON, use the field's Default value
//    - For Option<String> that default is None, which is exactly how we
//      treat an explicit null - so both spellings of "no more pages" work
//
// 3. Why follow `next` verbatim instead of rebuilding the query?
//    - The server already encodes page number, page size and field lists
//      into that URL; reconstructing it would just be a chance to get it
//      wrong
// -----------------------------------------------------------------------------
