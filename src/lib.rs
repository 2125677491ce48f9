//! # Actime - ActiveCollab time loader
//!
//! A command-line utility that fills a working week of ActiveCollab time
//! records from a declarative hours file mapping project, milestone and ticket
//! name fragments to hours.
//!
//! ## Features
//!
//! - **Fuzzy Matching**: Case-insensitive fragments fan out to every matching remote entity
//! - **Idempotent Runs**: Days that already carry your time are skipped per project
//! - **Random Apportionment**: Optional uniform random split of the daily total across tickets
//! - **Dry Run by Default**: Records are only reported unless `--commit` is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
