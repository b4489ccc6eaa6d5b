//! Trie construction: character mode and token (delimiter) mode.

use tracing::debug;

use super::{NodeAttrs, Trie, TrieMode};
use crate::mark::MarkMatcher;
use crate::normalize::extract_hostname;

/// Fully resolved build settings. Colors arrive as plain strings (or none);
/// theme lookup happens before the builder runs.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Render the first character as a labeled, filled circle.
    /// Only meaningful in character mode.
    pub head_mode: bool,
    pub keep_prefix: bool,
    pub keep_fqdn: bool,
    /// Lowercase node keys (labels keep their original case in token mode).
    pub ignore_case: bool,
    /// Suppress label text on terminal and head nodes.
    pub no_labels: bool,
    /// Token mode when set: split lines on this delimiter.
    pub delimiter: Option<String>,
    /// Reverse token order (token mode only), e.g. email domain chains.
    pub right_to_left: bool,
    pub color_normal: Option<String>,
    pub color_mark: Option<String>,
    pub color_head: Option<String>,
    pub text_normal: Option<String>,
    pub text_mark: Option<String>,
    pub text_head: Option<String>,
}

impl BuildOptions {
    fn line_colors(&self, marked: bool) -> (Option<String>, Option<String>) {
        if marked {
            (self.color_mark.clone(), self.text_mark.clone())
        } else {
            (self.color_normal.clone(), self.text_normal.clone())
        }
    }

    fn label_or_empty(&self, text: &str) -> String {
        if self.no_labels {
            String::new()
        } else {
            text.to_string()
        }
    }
}

/// Build a trie from deduplicated, filtered lines.
///
/// Empty lines, lines that normalize to nothing (character mode), and lines
/// with zero non-empty tokens (token mode) are skipped silently.
pub fn build<'a, I>(lines: I, matcher: &MarkMatcher, opts: &BuildOptions) -> Trie
where
    I: IntoIterator<Item = &'a str>,
{
    let trie = match &opts.delimiter {
        Some(delim) => build_token(lines, delim, matcher, opts),
        None => build_character(lines, matcher, opts),
    };
    debug!(
        nodes = trie.node_count(),
        edges = trie.edge_count(),
        "trie built"
    );
    trie
}

/// Character mode: one node per prefix of each normalized line.
fn build_character<'a, I>(lines: I, matcher: &MarkMatcher, opts: &BuildOptions) -> Trie
where
    I: IntoIterator<Item = &'a str>,
{
    let mut trie = Trie::new(TrieMode::Character);

    for raw in lines {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let base = extract_hostname(raw, opts.keep_prefix, opts.keep_fqdn);
        if base.is_empty() {
            continue;
        }

        let key = if opts.ignore_case {
            base.to_lowercase()
        } else {
            base.clone()
        };

        let (fill, text) = opts.line_colors(matcher.is_marked(&key));

        // The full string is always a terminal node. A prefix node that
        // already exists as a point (e.g. "acmefw01" seen after
        // "acmefw01-oob") is upgraded in place without disturbing edges.
        trie.promote_terminal(&key, opts.label_or_empty(&base), fill, text);

        let chars: Vec<char> = key.chars().collect();
        let head: String = chars[0].to_string();

        if !trie.contains(&head) {
            if opts.head_mode {
                trie.insert_if_absent(
                    &head,
                    NodeAttrs::circle(
                        opts.label_or_empty(&head),
                        opts.color_head.clone(),
                        opts.text_head.clone(),
                    ),
                );
            } else {
                trie.ensure_point(&head);
            }
        }

        // Walk the remaining characters, creating point nodes for the
        // internal prefixes.
        let mut parent = head;
        for ch in &chars[1..] {
            let mut child = parent.clone();
            child.push(*ch);
            trie.add_edge(&parent, &child);
            trie.ensure_point(&child);
            parent = child;
        }
    }

    trie
}

/// Token mode: one record node per token-chain prefix.
fn build_token<'a, I>(lines: I, delim: &str, matcher: &MarkMatcher, opts: &BuildOptions) -> Trie
where
    I: IntoIterator<Item = &'a str>,
{
    let mut trie = Trie::new(TrieMode::Token);

    for raw in lines {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let mut labels: Vec<&str> = raw.split(delim).filter(|t| !t.is_empty()).collect();
        if labels.is_empty() {
            continue;
        }

        if opts.right_to_left {
            labels.reverse();
        }

        let tokens: Vec<String> = if opts.ignore_case {
            labels.iter().map(|t| t.to_lowercase()).collect()
        } else {
            labels.iter().map(|t| t.to_string()).collect()
        };

        // Marking tests the original, unsplit line, not the tokens.
        let (fill, text) = opts.line_colors(matcher.is_marked(raw));

        let mut parent = tokens[0].clone();
        trie.insert_if_absent(
            &parent,
            NodeAttrs::record(opts.label_or_empty(labels[0]), fill.clone(), text.clone()),
        );

        for (label, token) in labels.iter().zip(&tokens).skip(1) {
            let child = format!("{parent}{delim}{token}");
            trie.add_edge(&parent, &child);
            trie.insert_if_absent(
                &child,
                NodeAttrs::record(opts.label_or_empty(label), fill.clone(), text.clone()),
            );
            parent = child;
        }
    }

    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::NodeShape;

    fn no_marks() -> MarkMatcher {
        MarkMatcher::compile(&[], false, false).unwrap()
    }

    fn colored() -> BuildOptions {
        BuildOptions {
            color_normal: Some("cornsilk2".to_string()),
            color_mark: Some("palegreen2".to_string()),
            text_normal: Some("black".to_string()),
            ..BuildOptions::default()
        }
    }

    #[test]
    fn shared_prefixes_merge() {
        let trie = build(["abc", "abd"], &no_marks(), &colored());

        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.edge_count(), 3);
        assert!(trie.edges().contains(&("a".to_string(), "ab".to_string())));
        assert!(trie.edges().contains(&("ab".to_string(), "abc".to_string())));
        assert!(trie.edges().contains(&("ab".to_string(), "abd".to_string())));

        assert_eq!(trie.nodes()["a"].shape, NodeShape::Point);
        assert_eq!(trie.nodes()["ab"].shape, NodeShape::Point);
        assert_eq!(trie.nodes()["abc"].shape, NodeShape::Record);
        assert_eq!(trie.nodes()["abd"].shape, NodeShape::Record);
    }

    #[test]
    fn duplicate_lines_are_idempotent() {
        let trie = build(["abc", "abc", "  abc  "], &no_marks(), &colored());
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.edge_count(), 2);
    }

    #[test]
    fn point_node_promoted_when_prefix_becomes_terminal() {
        // "host" is first created as an internal point on the way to
        // "host-oob", then a later line terminates exactly there.
        let trie = build(["host-oob", "host"], &no_marks(), &colored());

        let node = &trie.nodes()["host"];
        assert_eq!(node.shape, NodeShape::Record);
        assert_eq!(node.label.as_deref(), Some("host"));
        assert_eq!(node.fill_color.as_deref(), Some("cornsilk2"));
    }

    #[test]
    fn terminal_styling_survives_later_prefix_traffic() {
        // Reverse order: terminal first, then a longer line passes through.
        let trie = build(["host", "host-oob"], &no_marks(), &colored());
        assert_eq!(trie.nodes()["host"].shape, NodeShape::Record);
    }

    #[test]
    fn marked_line_gets_mark_colors() {
        let patterns = vec!["oob".to_string()];
        let matcher = MarkMatcher::compile(&patterns, false, false).unwrap();
        let trie = build(["srv-oob"], &matcher, &colored());

        assert_eq!(
            trie.nodes()["srv-oob"].fill_color.as_deref(),
            Some("palegreen2")
        );
    }

    #[test]
    fn ignore_case_folds_keys_but_labels_keep_display_text() {
        let opts = BuildOptions {
            ignore_case: true,
            ..colored()
        };
        let trie = build(["ABC"], &no_marks(), &opts);

        assert!(trie.contains("abc"));
        assert!(!trie.contains("ABC"));
        // Display label is the normalized (pre-fold) text.
        assert_eq!(trie.nodes()["abc"].label.as_deref(), Some("ABC"));
    }

    #[test]
    fn head_mode_styles_first_character() {
        let opts = BuildOptions {
            head_mode: true,
            color_head: Some("lightblue2".to_string()),
            text_head: Some("black".to_string()),
            ..colored()
        };
        let trie = build(["abc"], &no_marks(), &opts);

        let head = &trie.nodes()["a"];
        assert_eq!(head.shape, NodeShape::Circle);
        assert_eq!(head.label.as_deref(), Some("a"));
        assert_eq!(head.fill_color.as_deref(), Some("lightblue2"));
    }

    #[test]
    fn single_character_line_is_terminal_not_head() {
        let opts = BuildOptions {
            head_mode: true,
            color_head: Some("lightblue2".to_string()),
            ..colored()
        };
        let trie = build(["a"], &no_marks(), &opts);

        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.nodes()["a"].shape, NodeShape::Record);
    }

    #[test]
    fn no_labels_empties_label_text() {
        let opts = BuildOptions {
            no_labels: true,
            ..colored()
        };
        let trie = build(["ab"], &no_marks(), &opts);
        assert_eq!(trie.nodes()["ab"].label.as_deref(), Some(""));
    }

    #[test]
    fn hostname_normalization_applies_in_character_mode() {
        let trie = build(["server01.domain.local"], &no_marks(), &colored());
        assert!(trie.contains("server01"));
        assert!(!trie.contains("server01.domain.local"));
    }

    #[test]
    fn line_normalizing_to_empty_is_skipped() {
        let trie = build([".domain.local", ""], &no_marks(), &colored());
        assert_eq!(trie.node_count(), 0);
        assert_eq!(trie.edge_count(), 0);
    }

    fn token_opts(delim: &str) -> BuildOptions {
        BuildOptions {
            delimiter: Some(delim.to_string()),
            ..colored()
        }
    }

    #[test]
    fn token_chain_nodes_and_edges() {
        let trie = build(["a.b.c"], &no_marks(), &token_opts("."));

        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.edge_count(), 2);
        assert!(trie.edges().contains(&("a".to_string(), "a.b".to_string())));
        assert!(trie
            .edges()
            .contains(&("a.b".to_string(), "a.b.c".to_string())));

        // Each node shows only its own token.
        assert_eq!(trie.nodes()["a"].label.as_deref(), Some("a"));
        assert_eq!(trie.nodes()["a.b"].label.as_deref(), Some("b"));
        assert_eq!(trie.nodes()["a.b.c"].label.as_deref(), Some("c"));
    }

    #[test]
    fn token_nodes_are_records() {
        let trie = build(["10.0.0.1"], &no_marks(), &token_opts("."));
        for attrs in trie.nodes().values() {
            assert_eq!(attrs.shape, NodeShape::Record);
        }
    }

    #[test]
    fn consecutive_delimiters_produce_no_empty_tokens() {
        let trie = build(["/usr//bin"], &no_marks(), &token_opts("/"));
        assert_eq!(trie.node_count(), 2);
        assert!(trie.contains("usr"));
        assert!(trie.contains("usr/bin"));
    }

    #[test]
    fn delimiter_only_line_is_skipped() {
        let trie = build(["...", "."], &no_marks(), &token_opts("."));
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn right_to_left_reverses_chain_root() {
        let opts = BuildOptions {
            right_to_left: true,
            ..token_opts(".")
        };
        let trie = build(["example.com"], &no_marks(), &opts);

        assert!(trie.contains("com"));
        assert!(trie
            .edges()
            .contains(&("com".to_string(), "com.example".to_string())));
        assert_eq!(trie.nodes()["com.example"].label.as_deref(), Some("example"));
    }

    #[test]
    fn token_marking_tests_the_whole_line() {
        // Pattern matches the full line but no individual token.
        let patterns = vec!["b\\.c".to_string()];
        let matcher = MarkMatcher::compile(&patterns, false, false).unwrap();
        let trie = build(["a.b.c"], &matcher, &token_opts("."));

        for attrs in trie.nodes().values() {
            assert_eq!(attrs.fill_color.as_deref(), Some("palegreen2"));
        }
    }

    #[test]
    fn token_nodes_keep_first_writer_colors() {
        let patterns = vec!["marked$".to_string()];
        let matcher = MarkMatcher::compile(&patterns, false, false).unwrap();
        let trie = build(["a.b", "a.b.marked"], &matcher, &token_opts("."));

        // "a" and "a.b" were created by the unmarked line and stay normal.
        assert_eq!(trie.nodes()["a"].fill_color.as_deref(), Some("cornsilk2"));
        assert_eq!(trie.nodes()["a.b"].fill_color.as_deref(), Some("cornsilk2"));
        assert_eq!(
            trie.nodes()["a.b.marked"].fill_color.as_deref(),
            Some("palegreen2")
        );
    }
}
