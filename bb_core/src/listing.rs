//! Parser for `brew list --versions` output.
//!
//! Each line is `<name> <version tokens...>`. Parsing is best effort: lines
//! that do not carry at least a name and one version token are dropped and
//! reported back instead of failing the whole listing.

use std::collections::HashSet;

/// Result of parsing a package listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    /// `(name, version)` pairs in input order
    pub packages: Vec<(String, String)>,
    /// Non-blank lines that were dropped
    pub skipped: Vec<String>,
}

/// Parse one listing line into `(name, version)`.
///
/// The version is the remaining tokens joined with single spaces, so
/// `"python@3.12  3.12.1   3.12.2"` yields `"3.12.1 3.12.2"`.
pub fn parse_listing_line(line: &str) -> Option<(String, String)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let version = tokens.collect::<Vec<_>>().join(" ");
    if version.is_empty() {
        return None;
    }
    Some((name.to_string(), version))
}

/// Parse a whole listing.
///
/// Blank lines are ignored. A repeated name keeps its first occurrence and the
/// repeat is reported as skipped.
pub fn parse_listing(output: &str) -> ParsedListing {
    let mut parsed = ParsedListing::default();
    let mut seen = HashSet::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_listing_line(line) {
            Some((name, version)) => {
                if seen.insert(name.clone()) {
                    parsed.packages.push((name, version));
                } else {
                    parsed.skipped.push(line.to_string());
                }
            }
            None => parsed.skipped.push(line.to_string()),
        }
    }

    parsed
}
