//! Mark-pattern matching for terminal nodes.
//!
//! A line whose (normalized) text matches any configured pattern is
//! "marked" and rendered with the mark colors instead of the normal ones.

use regex::RegexBuilder;
use thiserror::Error;

/// Patterns marked by default: common suffixes for out-of-band interfaces,
/// lights-out management boards, and SNMP trap receivers.
pub const DEFAULT_MARK_PATTERNS: &[&str] =
    &["new", "old", "oob", "ilo", "trap", "traps", "lm[0-9][0-9]$"];

/// Returned when a filter or mark pattern fails to compile.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// True if `patterns` is exactly the built-in default list.
///
/// The builder uses this to decide whether end-of-string anchoring applies;
/// it must be computed on the user's list as given, before any anchoring.
pub fn is_default_patterns(patterns: &[String]) -> bool {
    patterns.len() == DEFAULT_MARK_PATTERNS.len()
        && patterns
            .iter()
            .zip(DEFAULT_MARK_PATTERNS)
            .all(|(a, b)| a == b)
}

/// A compiled set of mark patterns.
#[derive(Debug)]
pub struct MarkMatcher {
    patterns: Vec<regex::Regex>,
}

impl MarkMatcher {
    /// Compile a pattern set.
    ///
    /// With `anchor_defaults` set (caller detected the built-in default
    /// list), every pattern not already ending in `$` gets an end-of-string
    /// anchor so that e.g. "new" marks "server-new" but not "newyork".
    /// User-supplied custom sets compile verbatim.
    ///
    /// A list consisting of a single empty string means "match nothing";
    /// an empty regex would otherwise match every candidate.
    pub fn compile(
        patterns: &[String],
        anchor_defaults: bool,
        case_insensitive: bool,
    ) -> Result<Self, PatternError> {
        if patterns.len() == 1 && patterns[0].is_empty() {
            return Ok(Self {
                patterns: Vec::new(),
            });
        }

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let effective = if anchor_defaults && !pattern.ends_with('$') {
                format!("{pattern}$")
            } else {
                pattern.clone()
            };
            let regex = RegexBuilder::new(&effective)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|source| PatternError::Invalid {
                    pattern: pattern.clone(),
                    source,
                })?;
            compiled.push(regex);
        }

        Ok(Self { patterns: compiled })
    }

    /// True if any pattern matches anywhere in `candidate`.
    pub fn is_marked(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(candidate))
    }
}
