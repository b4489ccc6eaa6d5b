//! Graphviz DOT output.
//!
//! Rendering is fully deterministic: node declarations in ascending key
//! order, edges sorted by (parent, child), attributes in a fixed order.
//! Identical trie + settings always produce byte-identical output.

use std::io::Write;

use anyhow::{Context, Result};
use unicode_normalization::UnicodeNormalization;

use crate::trie::{NodeShape, Trie, TrieMode};

/// Graph layout direction (`rankdir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    LeftRight,
    /// Top to bottom.
    TopBottom,
}

impl Direction {
    pub fn as_dot(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::TopBottom => "TB",
        }
    }
}

/// Resolved serializer settings.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub direction: Direction,
    pub edge_color: Option<String>,
    /// Default stroke color for point-shaped nodes.
    pub point_color: Option<String>,
    pub font_name: String,
}

/// Escape user text for a DOT quoted string or Mrecord label.
///
/// Applied after NFC normalization so visually identical labels escape
/// identically. Carriage returns are dropped outright; braces, pipes and
/// angle brackets are record-structure metacharacters and must be escaped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfc() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '\t' => out.push_str("\\t"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '|' => out.push_str("\\|"),
            '<' => out.push_str("\\<"),
            '>' => out.push_str("\\>"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the trie as a DOT string.
pub fn render(trie: &Trie, opts: &RenderOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render_to(trie, opts, &mut buffer)?;
    String::from_utf8(buffer).context("DOT output was not valid UTF-8")
}

/// Render the trie to a writer.
pub fn render_to<W: Write>(trie: &Trie, opts: &RenderOptions, writer: &mut W) -> Result<()> {
    writeln!(writer, "graph tries {{")?;
    writeln!(writer, "  graph [fontname=\"{}\"];", opts.font_name)?;
    writeln!(writer, "  node  [fontname=\"{}\"];", opts.font_name)?;
    writeln!(writer, "  rankdir=\"{}\";", opts.direction.as_dot())?;

    if let Some(edge_color) = &opts.edge_color {
        writeln!(writer, "  edge [color=\"{edge_color}\"];")?;
    }

    // Node declarations, ascending key order.
    for (key, attrs) in trie.nodes() {
        let mut parts = vec![format!("shape=\"{}\"", attrs.shape.as_dot())];
        if let Some(label) = &attrs.label {
            parts.push(format!("label=\"{}\"", escape(label)));
        }
        if let Some(fill) = &attrs.fill_color {
            parts.push("style=\"filled\"".to_string());
            parts.push(format!("fillcolor=\"{fill}\""));
        }
        if let Some(font_color) = &attrs.font_color {
            parts.push(format!("fontcolor=\"{font_color}\""));
        }
        if attrs.shape == NodeShape::Point {
            if let Some(point_color) = &opts.point_color {
                parts.push(format!("color=\"{point_color}\""));
            }
        }
        writeln!(writer, "  \"{}\" [{}];", escape(key), parts.join(", "))?;
    }

    // Character mode only: pin the single-character heads to one rank and
    // chain them with invisible edges so the roots line up alphabetically.
    if trie.mode() == TrieMode::Character {
        let heads: Vec<&String> = trie
            .nodes()
            .keys()
            .filter(|k| k.chars().count() == 1)
            .collect();
        if !heads.is_empty() {
            let listed: Vec<String> = heads.iter().map(|h| format!("\"{}\"", escape(h))).collect();
            writeln!(writer, "  {{ rank = same; {} }}", listed.join("; "))?;
            for pair in heads.windows(2) {
                writeln!(
                    writer,
                    "  \"{}\" -- \"{}\" [style=invis];",
                    escape(pair[0]),
                    escape(pair[1])
                )?;
            }
        }
    }

    for (parent, child) in trie.edges() {
        writeln!(writer, "  \"{}\" -- \"{}\";", escape(parent), escape(child))?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}
