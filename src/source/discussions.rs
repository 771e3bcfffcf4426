// src/source/discussions.rs
// =============================================================================
// This module loads the unified discussion feed.
//
// Unlike the per-course Q&A walk, this is one paginated endpoint covering
// every course the instructor teaches. Each item carries its own body and
// a reference to the course it was posted in; we keep that reference as a
// bare slug so the printed record can link back to the course player.
//
// Rust concepts:
// - Nested Deserialize structs: replies and the course reference are
//   objects inside each discussion item
// - String replace: stripping the path separators from the course URL
// =============================================================================

use anyhow::Result;
use serde::Deserialize;
use url::Url;

use super::{Discussion, Record};
use crate::api::{fetch_all_pages, ApiClient};

// Raw API shapes - all fields required, decoding fails loudly otherwise.

#[derive(Debug, Deserialize)]
struct RawDiscussion {
    id: u64,
    title: String,
    body: String,
    replies: Vec<RawReply>,
    course: RawCourseRef,
}

#[derive(Debug, Deserialize)]
struct RawReply {
    body: String,
}

#[derive(Debug, Deserialize)]
struct RawCourseRef {
    url: String,
}

// Loads every discussion across all taught courses into Discussion records,
// in page order with item order preserved inside each page.
pub async fn load_discussions(client: &ApiClient, page_size: u32) -> Result<Vec<Record>> {
    let url = discussions_url(client, page_size)?;
    let raw: Vec<RawDiscussion> = fetch_all_pages(client, url).await?;

    let records = raw
        .into_iter()
        .map(|d| {
            Record::Discussion(Discussion {
                id: d.id,
                title: d.title,
                body: d.body,
                // The API sends the course as a path fragment like
                // "/learn-rust/". It gets reused as a single URL segment,
                // so the separators have to go.
                course: d.course.url.replace('/', ""),
                replies: d.replies.into_iter().map(|r| r.body).collect(),
            })
        })
        .collect();

    Ok(records)
}

// Builds the first-page URL of the discussion feed.
// Later pages come back ready-made in the response's `next` field.
fn discussions_url(client: &ApiClient, page_size: u32) -> Result<Url> {
    let mut url = client.url("taught-courses/discussions/")?;
    url.query_pairs_mut()
        .append_pair("fields[discussion]", "id,title,body,replies,course")
        .append_pair("fields[reply]", "body")
        .append_pair("fields[course]", "url")
        .append_pair("page_size", &page_size.to_string());
    Ok(url)
}
