// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the API client (this is where a missing token is caught)
// 3. Load every record from the chosen source, once
// 4. Prompt for search terms in a loop and print the matches
// 5. Exit with proper code (0 = normal exit, 1 = missing token, 2 = error)
//
// Rust concepts used:
// - async/await: Because the loading phase talks to the network
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod api;      // src/api/ - HTTP client and pagination
mod cli;      // src/cli.rs - command-line parsing
mod search;   // src/search/ - substring matching over records
mod source;   // src/source/ - the two data sources and their records

// Import items we need from our modules
use std::io::{self, BufRead, Write};

use api::ApiClient;
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use search::SearchOptions;
use source::Record;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = normal exit (empty input at the prompt)
//   Ok(1) = missing API token
//   Err = unexpected error (HTTP failure, bad JSON, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Build the API client before anything else. A missing UDEMY_TOKEN is
    // the one error we report as a plain message: no HTTP request has been
    // made yet, so there is nothing else to clean up.
    let client = match ApiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return Ok(1);
        }
    };

    // Load every record from the chosen source. This is the only phase
    // that touches the network; searching afterwards is purely in-memory.
    let (records, options) = match cli.command {
        Commands::Questions {
            case_sensitive,
            page_size,
        } => {
            println!("🔍 Loading the Q&A of your paid courses...");
            let records = source::load_questions(&client, page_size).await?;
            println!("✅ Loaded {} question(s)\n", records.len());
            (records, SearchOptions { case_sensitive })
        }
        Commands::Discussions {
            case_sensitive,
            page_size,
        } => {
            println!("🔍 Loading the discussions of your courses...");
            let records = source::load_discussions(&client, page_size).await?;
            println!("✅ Loaded {} discussion(s)\n", records.len());
            (records, SearchOptions { case_sensitive })
        }
    };

    // Hand the loaded records to the interactive prompt loop.
    // io::stdin().lock() gives us a BufRead we can read lines from.
    prompt_loop(io::stdin().lock(), &records, &options)
}

// The interactive part of the program: prompt, search, print, repeat.
//
// Taking any BufRead instead of stdin directly keeps this function testable:
// tests feed it an in-memory cursor and check the exit code.
//
// An empty (or whitespace-only) line is the signal to stop, and end-of-input
// is treated the same way, so `echo | qa-finder questions` exits cleanly.
fn prompt_loop<R: BufRead>(mut input: R, records: &[Record], options: &SearchOptions) -> Result<i32> {
    loop {
        // print! does not flush on its own, and the prompt has no newline,
        // so flush by hand or the user stares at a blank line
        print!("Terms: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // 0 bytes read = end of input
            break;
        }

        let terms = line.trim();
        if terms.is_empty() {
            break;
        }

        let matches = search::search(records, terms, options);
        if matches.is_empty() {
            println!("There are no matches!");
        } else {
            for record in matches {
                print_record(record);
            }
        }
    }

    Ok(0)
}

// Prints one matching record in its fixed block format.
//
// The two variants print differently on purpose: a question is just a title
// plus its replies, while a discussion also carries a web address and a body.
fn print_record(record: &Record) {
    match record {
        Record::Question(question) => {
            println!("******* {}", question.title);
            println!("{}", question.replies.join("\n"));
            println!("**\n");
        }
        Record::Discussion(discussion) => {
            println!("******* {}", discussion.title);
            println!("{}", discussion.url());
            println!("{}", discussion.body);
            println!("{}", discussion.replies.join("\n"));
            println!("**\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Question;
    use std::io::Cursor;

    fn sample_records() -> Vec<Record> {
        vec![Record::Question(Question {
            id: 1,
            title: "How do I install the exercise files?".to_string(),
            replies: vec!["They are attached to lecture 2.".to_string()],
        })]
    }

    #[test]
    fn empty_line_exits_with_zero() {
        let records = sample_records();
        let code = prompt_loop(Cursor::new("\n"), &records, &SearchOptions::default()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn whitespace_only_line_exits_with_zero() {
        let records = sample_records();
        let code = prompt_loop(Cursor::new("   \n"), &records, &SearchOptions::default()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn end_of_input_exits_with_zero() {
        let records = sample_records();
        let code = prompt_loop(Cursor::new(""), &records, &SearchOptions::default()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn searches_until_the_empty_line() {
        let records = sample_records();
        // Two searches (one hit, one miss), then the stop sentinel
        let input = Cursor::new("install\nnothing-matches-this\n\n");
        let code = prompt_loop(input, &records, &SearchOptions::default()).unwrap();
        assert_eq!(code, 0);
    }
}
