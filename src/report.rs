//! Output formatting for scan results.
//!
//! Four surfaces:
//! - Plain: the fixed triggers-list text layout, also written to the report
//!   file.
//! - Pretty: the plain report with a colored header and summary for terminal
//!   use.
//! - JSON: structured output for programmatic consumption.
//! - HTML: the plain report displayed verbatim inside a minimal page.

use colored::*;
use serde::Serialize;
use std::path::Path;

use crate::scan::{CallRecord, FilterRecord, ScanOutcome, TriggerRegistry};

const BANNER: &str = "==============================================";

/// Render the registry as the triggers-list text report.
///
/// Two fixed sections, "Trigger Calls" then "Trigger Filters", each iterated
/// in first-sighting order. An empty registry still renders both banners.
pub fn render(registry: &TriggerRegistry) -> String {
    let mut contents = String::new();

    push_banner(&mut contents, "Trigger Calls");
    for call in registry.calls() {
        push_entry_header(&mut contents, &call.name, &call.places);
        push_arguments(&mut contents, &call.arguments);
    }

    contents.push_str("\n\n\n\n");

    push_banner(&mut contents, "Trigger Filters");
    for filter in registry.filters() {
        push_entry_header(&mut contents, &filter.name, &filter.places);
        contents.push_str("\nTarget:\n");
        contents.push_str(&format!("\t{}\n", filter.target));
        push_arguments(&mut contents, &filter.arguments);
    }

    contents
}

fn push_banner(contents: &mut String, title: &str) {
    contents.push_str(BANNER);
    contents.push('\n');
    contents.push_str(&format!(" {}\n", title));
    contents.push_str(BANNER);
    contents.push('\n');
}

fn push_entry_header(contents: &mut String, name: &str, places: &[crate::scan::SourceLocation]) {
    contents.push_str("\n\n");
    contents.push_str(name);
    contents.push('\n');
    contents.push_str(&"-".repeat(name.len()));
    contents.push('\n');
    contents.push_str("Called from:\n");
    for place in places {
        contents.push_str(&format!("\t{}\n", place));
    }
}

fn push_arguments(contents: &mut String, arguments: &str) {
    if !arguments.is_empty() {
        contents.push_str("\nArguments:\n");
        contents.push_str(&format!("\t{}\n", arguments));
    }
}

/// Write the report file. Best-effort: a failed write is suppressed, the
/// in-memory report is still displayed.
pub fn write_report_file(path: &Path, contents: &str) {
    let _ = std::fs::write(path, contents);
}

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: String,
    pub root: String,
    pub files_scanned: usize,
    pub calls: &'a [CallRecord],
    pub filters: &'a [FilterRecord],
}

/// Build the JSON report for a completed scan.
pub fn to_json(root: &str, outcome: &ScanOutcome) -> anyhow::Result<String> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        root: root.to_string(),
        files_scanned: outcome.files_scanned,
        calls: outcome.registry.calls(),
        filters: outcome.registry.filters(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write results in JSON format.
pub fn write_json(root: &str, outcome: &ScanOutcome) -> anyhow::Result<()> {
    println!("{}", to_json(root, outcome)?);
    Ok(())
}

/// Write the report with a colored header and summary for terminal use.
pub fn write_pretty(root: &str, outcome: &ScanOutcome, contents: &str) {
    println!();
    print!("  ");
    print!("{}", "triggerscan".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", root);
    println!();

    println!("{}", contents);

    let calls = outcome.registry.calls().len();
    let filters = outcome.registry.filters().len();
    println!(
        "  {} trigger calls, {} trigger filters across {} files",
        calls.to_string().bold(),
        filters.to_string().bold(),
        outcome.files_scanned.to_string().bold()
    );
    println!();
}

/// Render the report inside a minimal HTML page.
///
/// The page is a dumb display of the report string; no markup is applied to
/// the report text itself.
pub fn to_html(contents: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Triggers</title>\n\
         </head>\n\
         <body>\n\
         <pre role=\"status\">{}</pre>\n\
         </body>\n\
         </html>\n",
        contents
    )
}

/// Write results as an HTML page.
pub fn write_html(contents: &str) {
    print!("{}", to_html(contents));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::SourceLocation;

    fn place(path: &str, line: usize) -> SourceLocation {
        SourceLocation {
            path: path.to_string(),
            line,
        }
    }

    #[test]
    fn test_render_empty_registry() {
        let registry = TriggerRegistry::new();
        let report = render(&registry);

        assert!(report.contains(" Trigger Calls\n"));
        assert!(report.contains(" Trigger Filters\n"));
        assert_eq!(report.matches(BANNER).count(), 4);
    }

    #[test]
    fn test_render_call_entry() {
        let mut registry = TriggerRegistry::new();
        registry.record_call("add_post", place("includes/model/post.php", 51), "$post");
        let report = render(&registry);

        assert!(report.contains("add_post\n--------\nCalled from:\n"));
        assert!(report.contains("\tincludes/model/post.php on line 51\n"));
        assert!(report.contains("\nArguments:\n\t$post\n"));
    }

    #[test]
    fn test_render_call_without_arguments_has_no_arguments_block() {
        let mut registry = TriggerRegistry::new();
        registry.record_call("init_request", place("a.php", 5), "");
        let report = render(&registry);

        assert!(report.contains("init_request"));
        assert!(!report.contains("Arguments:"));
    }

    #[test]
    fn test_render_filter_entry() {
        let mut registry = TriggerRegistry::new();
        registry.record_filter("markup_text", place("b.php", 3), "$array", "$extra");
        let report = render(&registry);

        assert!(report.contains("markup_text\n-----------\nCalled from:\n"));
        assert!(report.contains("\nTarget:\n\t$array\n"));
        assert!(report.contains("\nArguments:\n\t$extra\n"));
    }

    #[test]
    fn test_underline_matches_name_length() {
        let mut registry = TriggerRegistry::new();
        registry.record_call("x", place("a.php", 1), "");
        let report = render(&registry);
        assert!(report.contains("\n\nx\n-\nCalled from:\n"));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let mut registry = TriggerRegistry::new();
        registry.record_filter("f", place("a.php", 1), "$t", "");
        registry.record_call("c", place("a.php", 2), "");
        let report = render(&registry);

        let calls_at = report.find(" Trigger Calls").unwrap();
        let filters_at = report.find(" Trigger Filters").unwrap();
        assert!(calls_at < filters_at);
    }

    #[test]
    fn test_html_wraps_report_verbatim() {
        let mut registry = TriggerRegistry::new();
        registry.record_call("init_request", place("a.php", 5), "");
        let report = render(&registry);
        let html = to_html(&report);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&report));
    }
}
