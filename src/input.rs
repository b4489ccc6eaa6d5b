//! Input line sourcing and pre-build filtering.
//!
//! The builder consumes a flat, deduplicated sequence of strings; this
//! module owns getting from files/stdin to that sequence.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::mark::PatternError;

/// Read lines from each file in order.
pub fn read_files(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for file in files {
        lines.extend(read_file(file)?);
    }
    Ok(lines)
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Read lines from standard input until EOF.
pub fn read_stdin() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        lines.push(line.context("Failed to read from stdin")?);
    }
    Ok(lines)
}

/// Trim, drop empties, dedupe, and sort.
///
/// Duplicate input lines must contribute exactly one terminal node; sorting
/// makes the builder's insertion order independent of source order.
pub fn dedupe(lines: Vec<String>) -> Vec<String> {
    let raw_count = lines.len();
    let unique: BTreeSet<String> = lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    let unique: Vec<String> = unique.into_iter().collect();
    debug!(raw = raw_count, unique = unique.len(), "deduplicated input");
    unique
}

/// Pre-build regex line filter.
#[derive(Debug)]
pub struct LineFilter {
    regex: Regex,
    invert: bool,
}

impl LineFilter {
    /// Compile the filter pattern. Fails fast on an invalid regex, before
    /// any trie construction.
    pub fn compile(pattern: &str, invert: bool) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex, invert })
    }

    /// True if `line` should be kept (substring match, or its inverse).
    pub fn keeps(&self, line: &str) -> bool {
        self.regex.is_match(line) != self.invert
    }

    /// Keep only matching lines.
    pub fn apply(&self, mut lines: Vec<String>) -> Vec<String> {
        lines.retain(|line| self.keeps(line));
        debug!(matched = lines.len(), "applied line filter");
        lines
    }
}
