//! File classification by extension.

/// Which pattern set applies to a file's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// General-purpose source: checked against the call and filter patterns.
    General,
    /// Template source: checked against the template call pattern only.
    Template,
}

/// Map a file extension to its scanning syntax.
///
/// Exactly two extensions are recognized, case-sensitively. Anything else
/// returns `None` and the file is never opened.
pub fn syntax_for(extension: &str) -> Option<Syntax> {
    match extension {
        "php" => Some(Syntax::General),
        "twig" => Some(Syntax::Template),
        _ => None,
    }
}
