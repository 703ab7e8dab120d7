//! Command-line interface for triggerscan.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::report;
use crate::scan::TreeWalker;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Static extension-point scanner.
///
/// Scans an installation for trigger calls and filters and reports every
/// hook name with the sites it is invoked from, the filtered target, and
/// the raw argument text of its first sighting.
#[derive(Parser)]
#[command(name = "triggerscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install root to scan
    pub path: PathBuf,

    /// Output format: pretty, plain, json, or html
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Report file path (default: tools/triggers_list.txt under the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the report file
    #[arg(long)]
    pub no_report_file: bool,
}

/// Run a scan from parsed arguments.
pub fn run(args: &Cli) -> anyhow::Result<i32> {
    if !matches!(args.format.as_str(), "pretty" | "plain" | "json" | "html") {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'plain', 'json', or 'html'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let mut config = ScanConfig::new(&abs_path);
    if let Some(output) = &args.output {
        config = config.with_report_path(output);
    }

    let walker = TreeWalker::new(config.clone());
    let outcome = walker.scan()?;

    let contents = report::render(&outcome.registry);

    if !args.no_report_file {
        report::write_report_file(config.report_path(), &contents);
    }

    let root = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&root, &outcome)?,
        "html" => report::write_html(&contents),
        "plain" => print!("{}", contents),
        _ => report::write_pretty(&root, &outcome, &contents),
    }

    Ok(EXIT_SUCCESS)
}
