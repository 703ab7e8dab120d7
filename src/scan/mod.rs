//! Scanning pipeline: file classification, line extraction, aggregation,
//! and directory traversal.

mod extract;
mod registry;
mod syntax;
mod walker;

pub use extract::{extract, RawMatch};
pub use registry::{CallRecord, FilterRecord, SourceLocation, TriggerRegistry};
pub use syntax::{syntax_for, Syntax};
pub use walker::{ScanError, ScanOutcome, TreeWalker};
