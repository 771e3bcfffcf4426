// src/source/questions.rs
// =============================================================================
// This module loads Q&A records, one paid course at a time.
//
// Strategy:
// - List the courses you teach and keep the paid ones
// - For each paid course, page through its questions endpoint
// - Flatten every thread into a Question record (title + answer bodies)
//
// The course listing is a single request - it is the question feeds that
// paginate. Field selections mirror what the instructor API supports:
// we ask for the question fields the web UI shows and the body of each
// answer.
//
// Rust concepts:
// - Deserialize structs: The raw API shapes, required fields and all
// - Iterator chains: filter for paid courses, map answers to their bodies
// - Nested async calls: one page walk per course, strictly in sequence
// =============================================================================

use anyhow::Result;
use serde::Deserialize;
use url::Url;

use super::{Question, Record};
use crate::api::{fetch_all_pages, ApiClient, Page};

// Raw API shapes. Every field here is required on purpose: if the API
// stops sending one of them we want a decoding error naming the URL, not
// a silently empty record.

#[derive(Debug, Deserialize)]
struct RawCourse {
    id: u64,
    title: String,
    is_paid: bool,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: u64,
    title: String,
    replies: Vec<RawAnswer>,
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    body: String,
}

// Loads every Q&A thread of every paid course into Question records.
//
// Records arrive in course order, then page order, then item order - the
// same order a search will later report matches in.
pub async fn load_questions(client: &ApiClient, page_size: u32) -> Result<Vec<Record>> {
    let courses = fetch_paid_courses(client).await?;
    println!("📚 Found {} paid course(s)", courses.len());

    let mut records = Vec::new();
    for course in &courses {
        let url = questions_url(client, course.id, page_size)?;
        let threads: Vec<RawQuestion> = fetch_all_pages(client, url).await?;
        println!("   {} question(s) in {}", threads.len(), course.title);

        for thread in threads {
            records.push(Record::Question(Question {
                id: thread.id,
                title: thread.title,
                // Keep only the text of each answer, in answer order
                replies: thread.replies.into_iter().map(|a| a.body).collect(),
            }));
        }
    }

    Ok(records)
}

// Lists the courses taught by the authenticated instructor and keeps the
// paid ones. Free courses have their Q&A disabled, so there is nothing to
// fetch for them.
async fn fetch_paid_courses(client: &ApiClient) -> Result<Vec<RawCourse>> {
    let mut url = client.url("taught-courses/courses/")?;
    url.query_pairs_mut()
        .append_pair("fields[course]", "title,is_paid");

    let page: Page<RawCourse> = client.get_json(url.as_str()).await?;
    Ok(page.results.into_iter().filter(|c| c.is_paid).collect())
}

// Builds the first-page URL for one course's questions endpoint.
// Later pages come back ready-made in the response's `next` field.
fn questions_url(client: &ApiClient, course_id: u64, page_size: u32) -> Result<Url> {
    let mut url = client.url(&format!("courses/{}/questions/", course_id))?;
    url.query_pairs_mut()
        .append_pair("fields[question]", "title,num_replies,replies,content")
        .append_pair("fields[answer]", "body")
        .append_pair("page_size", &page_size.to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn loads_only_paid_courses_and_flattens_replies() {
        let mut server = Server::new_async().await;
        let client = ApiClient::with_endpoint("test-token".to_string(), &server.url()).unwrap();

        // Two courses, only one paid. There is deliberately no mock for
        // course 2's questions: fetching them would fail the test.
        let courses = server
            .mock("GET", "/taught-courses/courses/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {"id": 1, "title": "Learn Rust", "is_paid": true},
                        {"id": 2, "title": "Free Teaser", "is_paid": false}
                    ]
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let questions = server
            .mock("GET", "/courses/1/questions/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {
                            "id": 10,
                            "title": "Borrow checker trouble",
                            "replies": [
                                {"body": "Try cloning first."},
                                {"body": "Better: restructure the loop."}
                            ]
                        },
                        {"id": 11, "title": "No replies yet", "replies": []}
                    ],
                    "next": null
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let records = load_questions(&client, 100).await.unwrap();

        assert_eq!(records.len(), 2);
        match &records[0] {
            Record::Question(q) => {
                assert_eq!(q.id, 10);
                assert_eq!(q.title, "Borrow checker trouble");
                assert_eq!(
                    q.replies,
                    vec![
                        "Try cloning first.".to_string(),
                        "Better: restructure the loop.".to_string()
                    ]
                );
            }
            other => panic!("expected a question record, got {:?}", other),
        }
        match &records[1] {
            Record::Question(q) => assert!(q.replies.is_empty()),
            other => panic!("expected a question record, got {:?}", other),
        }

        courses.assert_async().await;
        questions.assert_async().await;
    }

    #[tokio::test]
    async fn a_thread_without_a_title_is_a_decoding_error() {
        let mut server = Server::new_async().await;
        let client = ApiClient::with_endpoint("test-token".to_string(), &server.url()).unwrap();

        let _courses = server
            .mock("GET", "/taught-courses/courses/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"id": 1, "title": "Learn Rust", "is_paid": true}]}"#)
            .create_async()
            .await;

        let _questions = server
            .mock("GET", "/courses/1/questions/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"id": 10, "replies": []}], "next": null}"#)
            .create_async()
            .await;

        let err = load_questions(&client, 100).await.unwrap_err();
        assert!(err.to_string().contains("Unexpected response shape"));
    }

    #[test]
    fn questions_url_carries_field_selection_and_page_size() {
        let client = ApiClient::with_endpoint(
            "test-token".to_string(),
            "https://www.udemy.com/instructor-api/v1/",
        )
        .unwrap();

        let url = questions_url(&client, 7, 50).unwrap();
        assert!(url.as_str().starts_with(
            "https://www.udemy.com/instructor-api/v1/courses/7/questions/?"
        ));
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&(
            "fields[question]".to_string(),
            "title,num_replies,replies,content".to_string()
        )));
        assert!(query.contains(&("fields[answer]".to_string(), "body".to_string())));
        assert!(query.contains(&("page_size".to_string(), "50".to_string())));
    }
}
