//! Aggregation of extracted sites, keyed by hook name.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Where a site was found, relative to the scan root.
///
/// `path` uses `/` separators regardless of platform; `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub path: String,
    pub line: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on line {}", self.path, self.line)
    }
}

/// Every known site of one trigger call hook.
#[derive(Debug, Clone, Serialize)]
pub struct CallRecord {
    pub name: String,
    pub places: Vec<SourceLocation>,
    /// Raw argument text of the first sighting only.
    pub arguments: String,
}

/// Every known site of one trigger filter hook.
#[derive(Debug, Clone, Serialize)]
pub struct FilterRecord {
    pub name: String,
    pub places: Vec<SourceLocation>,
    /// Filtered expression of the first sighting only.
    pub target: String,
    /// Raw argument text of the first sighting only.
    pub arguments: String,
}

/// Calls and filters aggregated by hook name, in first-sighting order.
///
/// Call names and filter names are independent namespaces: the same hook
/// name may appear in both. Places are appended in traversal order and
/// never deduplicated or resorted.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    calls: Vec<CallRecord>,
    filters: Vec<FilterRecord>,
    call_index: HashMap<String, usize>,
    filter_index: HashMap<String, usize>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call site. The first sighting of a hook name fixes its
    /// argument text; later sightings only add a place.
    pub fn record_call(&mut self, name: &str, place: SourceLocation, arguments: &str) {
        match self.call_index.get(name) {
            Some(&i) => self.calls[i].places.push(place),
            None => {
                self.call_index.insert(name.to_string(), self.calls.len());
                self.calls.push(CallRecord {
                    name: name.to_string(),
                    places: vec![place],
                    arguments: arguments.to_string(),
                });
            }
        }
    }

    /// Record a filter site. The first sighting of a hook name fixes its
    /// target and argument text; later sightings only add a place.
    pub fn record_filter(&mut self, name: &str, place: SourceLocation, target: &str, arguments: &str) {
        match self.filter_index.get(name) {
            Some(&i) => self.filters[i].places.push(place),
            None => {
                self.filter_index.insert(name.to_string(), self.filters.len());
                self.filters.push(FilterRecord {
                    name: name.to_string(),
                    places: vec![place],
                    target: target.to_string(),
                    arguments: arguments.to_string(),
                });
            }
        }
    }

    /// Call records in first-sighting order.
    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Filter records in first-sighting order.
    pub fn filters(&self) -> &[FilterRecord] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.filters.is_empty()
    }
}
