//! triedot library
//!
//! Builds character-level or token-level tries from text lines (hostnames,
//! IPs, paths, URLs, ...) and serializes them as Graphviz DOT.

pub mod cli;
pub mod dot;
pub mod input;
pub mod mark;
pub mod normalize;
pub mod samples;
pub mod theme;
pub mod trie;

pub use dot::{Direction, RenderOptions};
pub use mark::MarkMatcher;
pub use theme::{Theme, ThemeSet};
pub use trie::{BuildOptions, Trie, TrieMode};
