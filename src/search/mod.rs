// src/search/mod.rs
// =============================================================================
// This module contains the matching logic for the interactive search.
//
// A record matches the search terms when the terms appear as a substring
// of its title, of its body (if the record has one), or of any reply.
// Matching ignores letter case unless the user asked for --case-sensitive.
//
// The search itself is a plain linear scan over the loaded collection:
// a few thousand records live comfortably in memory and a human is typing
// the queries, so there is nothing to index.
//
// Rust concepts:
// - Lifetimes: search returns references into the caller's collection
// - Iterator adapters: filter + collect instead of a hand-written loop
// - Short-circuiting: a record is reported once, however many fields match
// =============================================================================

use crate::source::Record;

// How matching should behave. Today that is just case sensitivity, with
// case-insensitive as the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

// Returns every record that matches the terms, in collection order.
//
// The returned vector borrows from `records` - no cloning, the collection
// outlives every search anyway.
pub fn search<'a>(records: &'a [Record], terms: &str, options: &SearchOptions) -> Vec<&'a Record> {
    // Lowercase the needle once up front instead of once per field
    let needle = if options.case_sensitive {
        terms.to_string()
    } else {
        terms.to_lowercase()
    };

    records
        .iter()
        .filter(|record| record_matches(record, &needle, options.case_sensitive))
        .collect()
}

// The matching predicate for one record: title, then body, then replies,
// stopping at the first hit so a record never shows up twice.
fn record_matches(record: &Record, needle: &str, case_sensitive: bool) -> bool {
    if contains(record.title(), needle, case_sensitive) {
        return true;
    }

    if let Some(body) = record.body() {
        if contains(body, needle, case_sensitive) {
            return true;
        }
    }

    record
        .replies()
        .iter()
        .any(|reply| contains(reply, needle, case_sensitive))
}

// Substring containment with optional case folding.
// The needle is already folded by search(); only the haystack is folded here.
fn contains(text: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        text.contains(needle)
    } else {
        text.to_lowercase().contains(needle)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does Vec<&'a Record> mean?
//    - A vector of references that borrow from the input slice
//    - The 'a lifetime ties the references to `records`, so the compiler
//      guarantees the collection cannot be dropped while results exist
//
// 2. Why to_lowercase and not eq_ignore_ascii_case?
//    - We need substring containment, not equality
//    - to_lowercase also handles non-ASCII letters, which course Q&A is
//      full of
//
// 3. What is .any()?
//    - An iterator adapter that returns true as soon as one element
//      satisfies the closure - it stops early, like || does
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Discussion, Question};

    fn question(id: u64, title: &str, replies: &[&str]) -> Record {
        Record::Question(Question {
            id,
            title: title.to_string(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        })
    }

    fn discussion(id: u64, title: &str, body: &str) -> Record {
        Record::Discussion(Discussion {
            id,
            title: title.to_string(),
            body: body.to_string(),
            course: "learn-rust".to_string(),
            replies: vec![],
        })
    }

    #[test]
    fn matches_titles_ignoring_case() {
        let records = vec![question(1, "I have a foo question", &[])];

        let results = search(&records, "Foo", &SearchOptions::default());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn matches_inside_replies() {
        let records = vec![question(1, "Setup trouble", &["Reinstall the SDK first"])];

        let results = search(&records, "sdk", &SearchOptions::default());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn matches_inside_discussion_bodies() {
        let records = vec![discussion(1, "Feedback", "The regex section was great")];

        let results = search(&records, "REGEX", &SearchOptions::default());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn no_matches_means_empty_result() {
        let records = vec![question(1, "Setup trouble", &["Reinstall the SDK first"])];

        let results = search(&records, "docker", &SearchOptions::default());
        assert!(results.is_empty());
    }

    #[test]
    fn a_record_appears_once_even_with_many_matching_fields() {
        // "install" hits the title and both replies
        let records = vec![question(
            1,
            "How do I install this?",
            &["Install from the site", "Or install via brew"],
        )];

        let results = search(&records, "install", &SearchOptions::default());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn results_preserve_collection_order() {
        let records = vec![
            question(1, "deploy to prod", &[]),
            question(2, "local deploy", &[]),
            question(3, "unrelated", &["deploy scripts attached"]),
        ];

        let results = search(&records, "deploy", &SearchOptions::default());
        let ids: Vec<u64> = results
            .iter()
            .map(|r| match r {
                Record::Question(q) => q.id,
                Record::Discussion(d) => d.id,
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn case_sensitive_search_respects_case() {
        let records = vec![question(1, "I have a foo question", &[])];
        let options = SearchOptions {
            case_sensitive: true,
        };

        assert!(search(&records, "Foo", &options).is_empty());
        assert_eq!(search(&records, "foo", &options).len(), 1);
    }
}
