//! CLI definitions for triedot.
//!
//! The argument surface is flat (no subcommands): one invocation is one
//! build-and-render pass, with a few informational flags that short-circuit
//! the pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::dot::Direction;
use crate::mark::DEFAULT_MARK_PATTERNS;
use crate::theme::Theme;

/// CLI defaults for the color overrides. Resolution treats an argument that
/// still holds its default as "not overridden" and falls back to the theme.
pub const DEFAULT_COLOR_NORMAL: &str = "lightgoldenrod1";
pub const DEFAULT_COLOR_MARK: &str = "palegreen3";
pub const DEFAULT_COLOR_HEAD: &str = "lightblue";
pub const DEFAULT_COLOR_EDGE: &str = "gray60";
pub const DEFAULT_COLOR_POINT: &str = "gray60";

#[derive(Parser, Debug)]
#[command(name = "triedot")]
#[command(version)]
#[command(about = "Build a character-level or token-based trie and emit Graphviz DOT")]
#[command(long_about = "Build a character-level trie or token-based trie and emit Graphviz DOT.
Filtering (-f) and marking (-M) are case-sensitive.
Supports themes, font families, hostname normalisation, and sample data.
Graphviz is required to render the DOT output.")]
pub struct Cli {
    /// Input files (if omitted, read from stdin unless sample flags are used).
    pub files: Vec<PathBuf>,

    /// Keep Windows DOMAIN\host prefix (default is to strip it).
    #[arg(long)]
    pub keep_prefix: bool,

    /// Keep full DNS name (default is to strip after first '.').
    #[arg(long)]
    pub keep_fqdn: bool,

    /// Regex filter applied to input lines (case-sensitive).
    #[arg(short = 'f', long, default_value = ".*")]
    pub filter: String,

    /// Invert the regex filter: keep lines that do NOT match.
    #[arg(long)]
    pub invert_filter: bool,

    /// Regex patterns used to mark terminal nodes (case-sensitive).
    #[arg(
        short = 'M',
        long = "mark",
        num_args = 0..,
        default_values_t = DEFAULT_MARK_PATTERNS.iter().map(|p| p.to_string())
    )]
    pub mark: Vec<String>,

    /// Normalise internal node IDs to lowercase.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Remove labels from terminal and head nodes.
    #[arg(long)]
    pub no_labels: bool,

    /// Render first character as a filled circle (ignored in --delim mode).
    #[arg(short = 'H', long)]
    pub head: bool,

    /// Graph direction (LR=Left-to-Right, TB=Top-to-Bottom).
    #[arg(short = 'd', long = "dir", value_enum, default_value_t = DirectionArg::Lr)]
    pub dir: DirectionArg,

    /// Split input strings on this delimiter to build a token-based trie
    /// instead of a character-level trie (e.g. '.' for IPs, '/' for paths).
    #[arg(short = 'D', long, value_name = "CHAR")]
    pub delim: Option<String>,

    /// Reverse token order in --delim mode (e.g. email domains:
    /// com -> example -> user).
    #[arg(long)]
    pub rtl: bool,

    /// Write DOT output to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Color theme to apply to nodes.
    #[arg(short = 'T', long, default_value = "default")]
    pub theme: String,

    /// Font family for labels (safe, cross-platform choices).
    #[arg(short = 'F', long, default_value = "courier")]
    pub font: String,

    /// Override theme normal terminal color.
    #[arg(long, default_value = DEFAULT_COLOR_NORMAL)]
    pub color_normal: String,

    /// Override theme marked terminal color.
    #[arg(long, default_value = DEFAULT_COLOR_MARK)]
    pub color_mark: String,

    /// Override theme head-node color.
    #[arg(long, default_value = DEFAULT_COLOR_HEAD)]
    pub color_head: String,

    /// Override theme edge color.
    #[arg(long, default_value = DEFAULT_COLOR_EDGE)]
    pub color_edge: String,

    /// Override theme point-node color.
    #[arg(long, default_value = DEFAULT_COLOR_POINT)]
    pub color_point: String,

    /// Override text color for normal terminal nodes.
    #[arg(long)]
    pub text_normal: Option<String>,

    /// Override text color for marked terminal nodes.
    #[arg(long)]
    pub text_mark: Option<String>,

    /// Override text color for head node.
    #[arg(long)]
    pub text_head: Option<String>,

    /// Include built-in sample hostnames.
    #[arg(long)]
    pub sample_hosts: bool,

    /// Include built-in sample IPv4 addresses.
    #[arg(long)]
    pub sample_ips: bool,

    /// Include built-in sample UNIX-style directory paths.
    #[arg(long)]
    pub sample_paths: bool,

    /// Include built-in sample URLs.
    #[arg(long)]
    pub sample_urls: bool,

    /// Include built-in sample email addresses.
    #[arg(long)]
    pub sample_emails: bool,

    /// Include built-in sample NATO words.
    #[arg(long)]
    pub sample_nato: bool,

    /// List available themes and exit.
    #[arg(long)]
    pub list_themes: bool,

    /// Dump merged themes and fonts as TOML and exit.
    #[arg(long)]
    pub dump_themes: bool,

    /// Save current color/font settings as a theme NAME to themes.toml.
    #[arg(long, value_name = "NAME")]
    pub save_theme: Option<String>,

    /// Write debug information to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Layout direction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    #[value(name = "LR")]
    Lr,
    #[value(name = "TB")]
    Tb,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Lr => Direction::LeftRight,
            DirectionArg::Tb => Direction::TopBottom,
        }
    }
}

impl Cli {
    /// Resolve the final palette: a color flag that was changed from its
    /// CLI default wins over the theme, otherwise the theme value applies.
    /// Text colors have no CLI default, so any value given wins.
    pub fn resolve_colors(&self, theme: &Theme) -> Theme {
        let pick = |value: &str, default: &str, themed: &Option<String>| {
            if value != default {
                Some(value.to_string())
            } else {
                themed.clone()
            }
        };

        Theme {
            normal: pick(&self.color_normal, DEFAULT_COLOR_NORMAL, &theme.normal),
            mark: pick(&self.color_mark, DEFAULT_COLOR_MARK, &theme.mark),
            head: pick(&self.color_head, DEFAULT_COLOR_HEAD, &theme.head),
            edge: pick(&self.color_edge, DEFAULT_COLOR_EDGE, &theme.edge),
            point: pick(&self.color_point, DEFAULT_COLOR_POINT, &theme.point),
            text_normal: self.text_normal.clone().or_else(|| theme.text_normal.clone()),
            text_mark: self.text_mark.clone().or_else(|| theme.text_mark.clone()),
            text_head: self.text_head.clone().or_else(|| theme.text_head.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_args() {
        let cli = Cli::try_parse_from(["triedot"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.filter, ".*");
        assert_eq!(cli.theme, "default");
        assert_eq!(cli.font, "courier");
        assert_eq!(cli.dir, DirectionArg::Lr);
        assert!(cli.delim.is_none());
    }

    #[test]
    fn mark_defaults_to_builtin_patterns() {
        let cli = Cli::try_parse_from(["triedot"]).unwrap();
        assert_eq!(cli.mark.len(), DEFAULT_MARK_PATTERNS.len());
        assert_eq!(cli.mark[0], "new");
    }

    #[test]
    fn mark_accepts_multiple_values() {
        let cli = Cli::try_parse_from(["triedot", "-M", "alpha", "beta"]).unwrap();
        assert_eq!(cli.mark, vec!["alpha", "beta"]);
    }

    #[test]
    fn mark_accepts_empty_value() {
        let cli = Cli::try_parse_from(["triedot", "-M", ""]).unwrap();
        assert_eq!(cli.mark, vec![String::new()]);
    }

    #[test]
    fn dir_accepts_tb() {
        let cli = Cli::try_parse_from(["triedot", "-d", "TB"]).unwrap();
        assert_eq!(cli.dir, DirectionArg::Tb);
    }

    #[test]
    fn dir_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["triedot", "-d", "RL"]).is_err());
    }

    #[test]
    fn delim_and_rtl_parse() {
        let cli = Cli::try_parse_from(["triedot", "-D", ".", "--rtl"]).unwrap();
        assert_eq!(cli.delim.as_deref(), Some("."));
        assert!(cli.rtl);
    }

    #[test]
    fn resolve_prefers_changed_cli_color() {
        let cli = Cli::try_parse_from(["triedot", "--color-normal", "white"]).unwrap();
        let resolved = cli.resolve_colors(&Theme::fallback());
        assert_eq!(resolved.normal.as_deref(), Some("white"));
        // Untouched flags fall back to the theme.
        assert_eq!(resolved.mark.as_deref(), Some("palegreen2"));
    }

    #[test]
    fn resolve_default_color_falls_back_to_theme() {
        let cli = Cli::try_parse_from(["triedot"]).unwrap();
        let resolved = cli.resolve_colors(&Theme::fallback());
        assert_eq!(resolved.normal.as_deref(), Some("cornsilk2"));
        assert_eq!(resolved.edge.as_deref(), Some("gray60"));
    }

    #[test]
    fn resolve_text_override_wins() {
        let cli = Cli::try_parse_from(["triedot", "--text-mark", "white"]).unwrap();
        let resolved = cli.resolve_colors(&Theme::fallback());
        assert_eq!(resolved.text_mark.as_deref(), Some("white"));
        assert_eq!(resolved.text_normal.as_deref(), Some("black"));
    }

    #[test]
    fn resolve_keeps_theme_none_when_no_override() {
        let cli = Cli::try_parse_from(["triedot"]).unwrap();
        let resolved = cli.resolve_colors(&Theme::default());
        assert_eq!(resolved.normal, None);
        assert_eq!(resolved.text_normal, None);
    }
}
