// src/source/mod.rs
// =============================================================================
// This module contains the two data sources and the records they produce.
//
// Submodules:
// - questions: Walks the Q&A of each paid course, one course at a time
// - discussions: Walks the unified discussion feed across all courses
//
// Both sources flatten raw API items into the Record enum below. The two
// record shapes stay distinct (a question has no body, a discussion carries
// a body and a web address), but the accessors give the search module one
// uniform view of "the texts worth matching against".
//
// Rust concepts:
// - Enums with data: One type covering two differently shaped records
// - Methods on enums: match once here instead of everywhere
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod discussions;
mod questions;

// Re-export the loading entry points
pub use discussions::load_discussions;
pub use questions::load_questions;

// One Q&A thread from a course, flattened: the thread title plus the body
// of every answer, in the order the API returned them.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub replies: Vec<String>,
}

// One item from the discussion feed. Unlike a question it has a body of its
// own, and it remembers which course it belongs to so we can print a link.
#[derive(Debug, Clone)]
pub struct Discussion {
    pub id: u64,
    pub title: String,
    pub body: String,
    // The course's URL fragment with the path separators stripped,
    // ready to be dropped into a URL as a single path segment
    pub course: String,
    pub replies: Vec<String>,
}

impl Discussion {
    /// Web address of this discussion inside the course player.
    pub fn url(&self) -> String {
        format!(
            "https://www.udemy.com/{}/learn/#questions/{}",
            self.course, self.id
        )
    }
}

// A loaded record from either source.
//
// The collection built during the load phase is a Vec<Record>; searching
// and printing both work on this type.
#[derive(Debug, Clone)]
pub enum Record {
    Question(Question),
    Discussion(Discussion),
}

impl Record {
    /// The record's title - both variants have one.
    pub fn title(&self) -> &str {
        match self {
            Record::Question(question) => &question.title,
            Record::Discussion(discussion) => &discussion.title,
        }
    }

    /// The record's own body, if this kind of record has one.
    ///
    /// Questions never do; the thread content lives in the replies.
    pub fn body(&self) -> Option<&str> {
        match self {
            Record::Question(_) => None,
            Record::Discussion(discussion) => Some(&discussion.body),
        }
    }

    /// The reply bodies, in the order the API returned them.
    pub fn replies(&self) -> &[String] {
        match self {
            Record::Question(question) => &question.replies,
            Record::Discussion(discussion) => &discussion.replies,
        }
    }
}
