//! Triggerscan - static extension-point scanner.
//!
//! Triggerscan walks an installation tree and finds every site that invokes
//! the trigger mechanism: `$trigger->call(...)` and
//! `Trigger::current()->filter(...)` in general source files, and
//! `{{ trigger.call(...) }}` expressions in templates. Sites are aggregated
//! by hook name and rendered as a report of every extension point, where it
//! is reached from, and what it is invoked with.
//!
//! Extraction is line-oriented pattern matching, not parsing: an expression
//! split across lines is not detected, and a filter target containing a
//! top-level comma is split at the first comma. See `scan::extract` for the
//! exact rules.
//!
//! # Architecture
//!
//! - `config`: scan configuration (exclusion list, report file path)
//! - `scan`: file classification, line extraction, aggregation, traversal
//! - `report`: output formatting (plain text, pretty, JSON, HTML)
//! - `cli`: command-line surface

pub mod cli;
pub mod config;
pub mod report;
pub mod scan;

pub use config::ScanConfig;
pub use scan::{
    extract, syntax_for, CallRecord, FilterRecord, RawMatch, ScanError, ScanOutcome,
    SourceLocation, Syntax, TreeWalker, TriggerRegistry,
};
