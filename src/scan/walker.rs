//! Directory traversal driving the scan.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ScanConfig;

use super::{extract, syntax_for, RawMatch, SourceLocation, Syntax, TriggerRegistry};

/// Fatal scan failures. Everything below root access is recovered locally
/// by skipping and continuing.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot access scan root {path:?}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The completed result of one traversal.
#[derive(Debug)]
pub struct ScanOutcome {
    pub registry: TriggerRegistry,
    pub files_scanned: usize,
}

/// Depth-first pre-order walk of the install root, streaming recognized
/// files line by line through the extractor into the registry.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the configured root.
    ///
    /// Sibling entries are visited in lexicographic file-name order so the
    /// report is stable across platforms. Only an unreadable root is fatal:
    /// unreadable files and subtrees are skipped silently.
    pub fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let root = self.config.root();

        // Probe the root up front so a missing or unreadable root surfaces
        // as a fatal error instead of an empty result.
        if let Err(source) = std::fs::read_dir(root) {
            return Err(ScanError::RootAccess {
                path: root.to_path_buf(),
                source,
            });
        }

        let mut registry = TriggerRegistry::new();
        let mut files_scanned = 0;

        let entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && self.config.is_excluded(e.path())));

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                // Unreadable subtree: skip and continue the walk.
                Err(_) => continue,
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let ext = entry.path().extension().and_then(|e| e.to_str()).unwrap_or("");
            let Some(syntax) = syntax_for(ext) else {
                continue;
            };

            if self.scan_file(entry.path(), syntax, &mut registry) {
                files_scanned += 1;
            }
        }

        Ok(ScanOutcome {
            registry,
            files_scanned,
        })
    }

    /// Stream one file through the extractor. Returns false if the file
    /// could not be opened.
    fn scan_file(&self, path: &Path, syntax: Syntax, registry: &mut TriggerRegistry) -> bool {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let relative = self.relative_path(path);
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_number = 0;

        // Read raw bytes and decode lossily: a stray non-UTF-8 byte on one
        // line must not hide trigger sites on the lines after it.
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                // Unreadable remainder: give up on the rest of this file.
                Err(_) => break,
            }
            line_number += 1;
            let line = String::from_utf8_lossy(&buf);

            for found in extract(syntax, &line) {
                let place = SourceLocation {
                    path: relative.clone(),
                    line: line_number,
                };
                match found {
                    RawMatch::Call { hook, arguments } => {
                        registry.record_call(&hook, place, &arguments);
                    }
                    RawMatch::Filter {
                        hook,
                        target,
                        arguments,
                    } => {
                        registry.record_filter(&hook, place, &target, &arguments);
                    }
                }
            }
        }

        true
    }

    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(self.config.root())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
