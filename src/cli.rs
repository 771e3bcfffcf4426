// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The two subcommands pick the data source: `questions` walks the Q&A of
// each paid course one by one, `discussions` reads the unified discussion
// feed that spans every course you teach.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "qa-finder",
    version = "0.1.0",
    about = "A CLI tool to search the Q&A and discussions of your Udemy courses",
    long_about = "qa-finder downloads every question (or discussion) from the Udemy \
                  instructor API once, then lets you run as many substring searches \
                  over titles, bodies and replies as you like without re-fetching."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (questions, discussions)
//
// Each variant represents a different data source the tool can load
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the Q&A threads of every paid course you teach
    ///
    /// Example: qa-finder questions
    Questions {
        /// Match terms exactly instead of ignoring letter case
        ///
        /// This is an optional flag: --case-sensitive
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        case_sensitive: bool,

        /// How many items to request per API page (default: 100)
        ///
        /// #[arg(long, default_value_t = 100)] creates --page-size with a default
        #[arg(long, default_value_t = 100)]
        page_size: u32,
    },

    /// Search the discussion feed across all of your courses
    ///
    /// Example: qa-finder discussions --case-sensitive
    Discussions {
        /// Match terms exactly instead of ignoring letter case
        #[arg(long)]
        case_sensitive: bool,

        /// How many items to request per API page (default: 100)
        #[arg(long, default_value_t = 100)]
        page_size: u32,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why subcommands instead of one flag?
//    - The two sources return differently shaped records (a question has
//      no body, a discussion does) and print differently
//    - A subcommand makes the choice explicit, like `git commit` vs `git log`
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why bool for --case-sensitive?
//    - clap turns a bool field with #[arg(long)] into a presence flag
//    - Absent = false (the default, case-insensitive search)
//
// 4. What is u32?
//    - An unsigned 32-bit integer; page sizes are small positive numbers,
//      so u32 is plenty and clap validates the input for us
// -----------------------------------------------------------------------------
