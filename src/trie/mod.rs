//! Trie data model: nodes keyed by their full prefix string, plus a set of
//! parent→child edges.
//!
//! Two input lines sharing a prefix share every node along that prefix, so
//! node keys double as identities. Ordered collections keep iteration (and
//! therefore serialization) deterministic.

mod builder;

pub use builder::{build, BuildOptions};

use std::collections::{BTreeMap, BTreeSet};

/// How a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Internal prefix node, no terminal significance.
    Point,
    /// Head node (first character) in head mode.
    Circle,
    /// Terminal node: a complete input string or token-chain entry.
    Record,
}

impl NodeShape {
    /// The Graphviz shape name.
    pub fn as_dot(self) -> &'static str {
        match self {
            NodeShape::Point => "point",
            NodeShape::Circle => "circle",
            NodeShape::Record => "Mrecord",
        }
    }
}

/// Visual attributes of a single node.
///
/// `label` is `None` for nodes that carry no label attribute at all (plain
/// point nodes) and `Some("")` when labels are suppressed. The `filled`
/// style is derived from `fill_color` at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAttrs {
    pub shape: NodeShape,
    pub label: Option<String>,
    pub fill_color: Option<String>,
    pub font_color: Option<String>,
}

impl NodeAttrs {
    fn point() -> Self {
        Self {
            shape: NodeShape::Point,
            label: None,
            fill_color: None,
            font_color: None,
        }
    }

    fn circle(label: String, fill_color: Option<String>, font_color: Option<String>) -> Self {
        Self {
            shape: NodeShape::Circle,
            label: Some(label),
            fill_color,
            font_color,
        }
    }

    fn record(label: String, fill_color: Option<String>, font_color: Option<String>) -> Self {
        Self {
            shape: NodeShape::Record,
            label: Some(label),
            fill_color,
            font_color,
        }
    }
}

/// Which algorithm built the trie. Token mode changes serialization: the
/// head-alignment hint only applies in character mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieMode {
    Character,
    Token,
}

/// The built trie: node map + edge set.
///
/// Construction is owned by [`build`]; the structure is read-only once
/// returned.
#[derive(Debug)]
pub struct Trie {
    mode: TrieMode,
    nodes: BTreeMap<String, NodeAttrs>,
    edges: BTreeSet<(String, String)>,
}

impl Trie {
    fn new(mode: TrieMode) -> Self {
        Self {
            mode,
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> TrieMode {
        self.mode
    }

    /// Nodes in ascending key order.
    pub fn nodes(&self) -> &BTreeMap<String, NodeAttrs> {
        &self.nodes
    }

    /// Edges in ascending (parent, child) order. Duplicates have collapsed.
    pub fn edges(&self) -> &BTreeSet<(String, String)> {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    fn add_edge(&mut self, parent: &str, child: &str) {
        self.edges.insert((parent.to_string(), child.to_string()));
    }

    /// Get-or-create with point defaults. Never downgrades an existing node.
    fn ensure_point(&mut self, key: &str) {
        self.nodes
            .entry(key.to_string())
            .or_insert_with(NodeAttrs::point);
    }

    fn insert_if_absent(&mut self, key: &str, attrs: NodeAttrs) {
        self.nodes.entry(key.to_string()).or_insert(attrs);
    }

    /// Promote `key` to a terminal record, creating it if needed.
    ///
    /// Shape and label are always overwritten; colors only when the caller
    /// supplies one, so a prior marked terminal keeps its colors when the
    /// theme resolves a color to none.
    fn promote_terminal(
        &mut self,
        key: &str,
        label: String,
        fill_color: Option<String>,
        font_color: Option<String>,
    ) {
        let node = self
            .nodes
            .entry(key.to_string())
            .or_insert_with(NodeAttrs::point);
        node.shape = NodeShape::Record;
        node.label = Some(label);
        if fill_color.is_some() {
            node.fill_color = fill_color;
        }
        if font_color.is_some() {
            node.font_color = font_color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_point_does_not_overwrite() {
        let mut trie = Trie::new(TrieMode::Character);
        trie.promote_terminal("ab", "ab".to_string(), Some("red".to_string()), None);
        trie.ensure_point("ab");

        let node = &trie.nodes()["ab"];
        assert_eq!(node.shape, NodeShape::Record);
        assert_eq!(node.fill_color.as_deref(), Some("red"));
    }

    #[test]
    fn promote_upgrades_point_in_place() {
        let mut trie = Trie::new(TrieMode::Character);
        trie.ensure_point("ab");
        trie.promote_terminal("ab", "ab".to_string(), Some("red".to_string()), None);

        let node = &trie.nodes()["ab"];
        assert_eq!(node.shape, NodeShape::Record);
        assert_eq!(node.label.as_deref(), Some("ab"));
        assert_eq!(node.fill_color.as_deref(), Some("red"));
    }

    #[test]
    fn promote_without_color_keeps_existing_color() {
        let mut trie = Trie::new(TrieMode::Character);
        trie.promote_terminal("ab", "ab".to_string(), Some("red".to_string()), None);
        trie.promote_terminal("ab", "ab".to_string(), None, None);

        assert_eq!(trie.nodes()["ab"].fill_color.as_deref(), Some("red"));
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut trie = Trie::new(TrieMode::Character);
        trie.add_edge("a", "ab");
        trie.add_edge("a", "ab");
        assert_eq!(trie.edge_count(), 1);
    }
}
