//! Line-oriented extraction of trigger call and filter sites.
//!
//! Extraction is regex matching against single lines, not parsing. Known
//! limitations, kept on purpose:
//!
//! - An expression split across multiple lines is not detected.
//! - The filter target is everything up to the first comma, so a target
//!   expression containing a comma (e.g. inside a nested call) is mis-split.
//! - The trailing-argument capture is greedy up to the last `)` on the line,
//!   so two argument-bearing calls on one line merge into a single match.

use lazy_static::lazy_static;
use regex::Regex;

use super::Syntax;

lazy_static! {
    /// `$trigger->call("name", args)` or `Trigger::current()->call('name')`.
    /// The hook name is a single- or double-quoted string with no embedded
    /// quote of the same kind.
    static ref CALL_PATTERN: Regex = Regex::new(
        r#"(\$trigger|Trigger::current\(\))->call\(("[^"]+"|'[^']+')(,\s*(.+))?\)"#
    )
    .unwrap();

    /// `$trigger->filter($target, "name", args)`. The target is a plain
    /// non-greedy run up to the first comma.
    static ref FILTER_PATTERN: Regex = Regex::new(
        r#"(\$trigger|Trigger::current\(\))->filter\(([^,]+),\s*("[^"]+"|'[^']+')(,\s*(.+))?\)"#
    )
    .unwrap();

    /// `{{ trigger.call("name", args) }}` with tolerant interior whitespace.
    static ref TEMPLATE_PATTERN: Regex = Regex::new(
        r#"\{\{\s*trigger\.call\(("[^"]+"|'[^']+')(,\s*(.+))?\)\s*\}\}"#
    )
    .unwrap();
}

/// One detected site on a line, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMatch {
    Call {
        hook: String,
        arguments: String,
    },
    Filter {
        hook: String,
        target: String,
        arguments: String,
    },
}

/// Extract every trigger site from one line of text.
///
/// General-syntax lines are checked against both the call and the filter
/// pattern; template-syntax lines against the template call pattern only.
/// Matches of one pattern are produced in left-to-right order, call matches
/// before filter matches.
pub fn extract(syntax: Syntax, line: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();

    match syntax {
        Syntax::General => {
            for caps in CALL_PATTERN.captures_iter(line) {
                matches.push(RawMatch::Call {
                    hook: strip_quotes(&caps[2]).to_string(),
                    arguments: trailing_arguments(caps.get(4).map(|m| m.as_str())),
                });
            }
            for caps in FILTER_PATTERN.captures_iter(line) {
                matches.push(RawMatch::Filter {
                    hook: strip_quotes(&caps[3]).to_string(),
                    target: trim_expression(&caps[2]).to_string(),
                    arguments: trailing_arguments(caps.get(5).map(|m| m.as_str())),
                });
            }
        }
        Syntax::Template => {
            for caps in TEMPLATE_PATTERN.captures_iter(line) {
                matches.push(RawMatch::Call {
                    hook: strip_quotes(&caps[1]).to_string(),
                    arguments: trailing_arguments(caps.get(3).map(|m| m.as_str())),
                });
            }
        }
    }

    matches
}

/// Strip the surrounding quotes from a matched hook name.
fn strip_quotes(quoted: &str) -> &str {
    quoted.trim_matches(|c| c == '"' || c == '\'')
}

/// Trim leading/trailing commas and whitespace from an expression.
fn trim_expression(text: &str) -> &str {
    text.trim_matches(|c: char| c == ',' || c.is_whitespace())
}

fn trailing_arguments(captured: Option<&str>) -> String {
    trim_expression(captured.unwrap_or("")).to_string()
}
