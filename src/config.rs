//! Scan configuration.
//!
//! All fixed installation constants (the exclusion denylist, the report file
//! location) live in an explicit `ScanConfig` value handed to the walker, so
//! scans against synthetic trees can swap any of them out.

use std::path::{Path, PathBuf};

/// Directories never descended into, relative to the install root:
/// the tool's own directory and the vendored libraries.
const DEFAULT_EXCLUDES: &[&str] = &["tools", "includes/lib/Twig", "includes/lib/IXR"];

/// Default report file, relative to the install root.
const DEFAULT_REPORT_FILE: &str = "tools/triggers_list.txt";

/// Configuration for one scan of an installation root.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    root: PathBuf,
    excluded: Vec<PathBuf>,
    report_path: PathBuf,
}

impl ScanConfig {
    /// Build the configuration for an install root with the default
    /// exclusion list and report path.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let excluded = DEFAULT_EXCLUDES.iter().map(|e| root.join(e)).collect();
        let report_path = root.join(DEFAULT_REPORT_FILE);
        Self {
            root,
            excluded,
            report_path,
        }
    }

    /// Replace the exclusion list with absolute directory paths.
    pub fn with_excludes(mut self, excluded: Vec<PathBuf>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Replace the report file path.
    pub fn with_report_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.report_path = path.as_ref().to_path_buf();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Whether a directory should never be descended into.
    ///
    /// The check is an exact match against the full directory path, not a
    /// prefix match: a directory nested under an excluded one is only
    /// unreachable because the walk never descends that far, and a directory
    /// that merely shares a listed path as its prefix is still scanned.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|e| e == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes() {
        let config = ScanConfig::new("/srv/app");
        assert!(config.is_excluded(Path::new("/srv/app/tools")));
        assert!(config.is_excluded(Path::new("/srv/app/includes/lib/Twig")));
        assert!(config.is_excluded(Path::new("/srv/app/includes/lib/IXR")));
        assert!(!config.is_excluded(Path::new("/srv/app/includes")));
        assert!(!config.is_excluded(Path::new("/srv/app/themes")));
    }

    #[test]
    fn test_exclusion_is_exact_not_prefix() {
        let config = ScanConfig::new("/srv/app");
        // Subdirectories of an excluded directory do not match themselves.
        assert!(!config.is_excluded(Path::new("/srv/app/tools/nested")));
        // Sibling names that extend an excluded path are not excluded.
        assert!(!config.is_excluded(Path::new("/srv/app/toolshed")));
    }

    #[test]
    fn test_default_report_path() {
        let config = ScanConfig::new("/srv/app");
        assert_eq!(
            config.report_path(),
            Path::new("/srv/app/tools/triggers_list.txt")
        );
    }

    #[test]
    fn test_overrides() {
        let config = ScanConfig::new("/srv/app")
            .with_excludes(vec![PathBuf::from("/srv/app/vendor")])
            .with_report_path("/tmp/report.txt");
        assert!(config.is_excluded(Path::new("/srv/app/vendor")));
        assert!(!config.is_excluded(Path::new("/srv/app/tools")));
        assert_eq!(config.report_path(), Path::new("/tmp/report.txt"));
    }
}
