//! Color themes and font families.
//!
//! A theme names the six node/edge colors and three text colors used by the
//! builder and serializer. Built-in themes are compiled in; custom themes
//! overlay them from a `themes.toml` in the user's data directory (see
//! [`io`]). The merged set is loaded once at startup into an immutable
//! [`ThemeSet`]; the core pipeline only ever sees fully resolved color
//! strings.

mod io;

pub use io::{save_theme, themes_path};

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One color palette. `None` means "emit no color for this role".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_mark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_head: Option<String>,
}

impl Theme {
    /// Fully populated palette.
    #[allow(clippy::too_many_arguments)]
    fn full(
        normal: &str,
        mark: &str,
        head: &str,
        edge: &str,
        point: &str,
        text_normal: &str,
        text_mark: &str,
        text_head: &str,
    ) -> Self {
        Self {
            normal: Some(normal.to_string()),
            mark: Some(mark.to_string()),
            head: Some(head.to_string()),
            edge: Some(edge.to_string()),
            point: Some(point.to_string()),
            text_normal: Some(text_normal.to_string()),
            text_mark: Some(text_mark.to_string()),
            text_head: Some(text_head.to_string()),
        }
    }

    /// The canonical fallback theme.
    pub fn fallback() -> Self {
        Self::full(
            "cornsilk2",
            "palegreen2",
            "lightblue2",
            "gray60",
            "gray60",
            "black",
            "black",
            "black",
        )
    }
}

/// Merged theme and font tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSet {
    #[serde(default)]
    pub themes: BTreeMap<String, Theme>,
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,
}

impl ThemeSet {
    /// The compiled-in themes and fonts.
    pub fn builtin() -> Self {
        let mut themes = BTreeMap::new();

        themes.insert("default".to_string(), Theme::fallback());
        themes.insert(
            "warm-sand".to_string(),
            Theme::full(
                "cornsilk2",
                "palegreen2",
                "lightblue2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "soft-spring".to_string(),
            Theme::full(
                "oldlace",
                "darkseagreen1",
                "lightcyan2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "cool-mist".to_string(),
            Theme::full(
                "azure2",
                "mediumspringgreen",
                "powderblue",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "soft-neutral".to_string(),
            Theme::full(
                "honeydew2",
                "lightgreen",
                "lightsteelblue1",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "warm-pastels".to_string(),
            Theme::full(
                "ivory2",
                "lightgoldenrod2",
                "paleturquoise2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "accent".to_string(),
            Theme::full(
                "papayawhip",
                "palegreen3",
                "skyblue1",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "pastel1".to_string(),
            Theme::full(
                "mistyrose1",
                "palegreen2",
                "lightcyan2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "pastel2".to_string(),
            Theme::full(
                "lemonchiffon1",
                "lightsteelblue1",
                "thistle1",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "piyg".to_string(),
            Theme::full(
                "seashell2",
                "palegreen3",
                "plum1",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "rdbu".to_string(),
            Theme::full(
                "mistyrose2",
                "lightsteelblue3",
                "lightskyblue2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "set".to_string(),
            Theme::full(
                "lightgoldenrod1",
                "darkseagreen2",
                "lightpink2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "bold".to_string(),
            Theme::full(
                "lightgoldenrod1",
                "dodgerblue1",
                "tomato",
                "gold3",
                "gold3",
                "black",
                "white",
                "white",
            ),
        );
        themes.insert(
            "nightfall".to_string(),
            Theme::full(
                "gray20",
                "deepskyblue3",
                "gold2",
                "gray60",
                "gray60",
                "white",
                "white",
                "black",
            ),
        );
        themes.insert(
            "midnight".to_string(),
            Theme::full(
                "gray18",
                "springgreen3",
                "lightsalmon2",
                "gray55",
                "gray55",
                "white",
                "white",
                "white",
            ),
        );
        themes.insert(
            "safe".to_string(),
            Theme::full(
                "lightgray",
                "steelblue1",
                "lightyellow2",
                "gray60",
                "gray60",
                "black",
                "black",
                "black",
            ),
        );
        themes.insert(
            "hotdog".to_string(),
            Theme::full(
                "yellow", "red", "blue", "black", "black", "black", "white", "white",
            ),
        );
        themes.insert("none".to_string(), Theme::default());
        themes.insert(
            "highlight".to_string(),
            Theme {
                mark: Some("yellow".to_string()),
                head: Some("palegreen2".to_string()),
                ..Theme::default()
            },
        );
        themes.insert(
            "tacky-test".to_string(),
            Theme::full(
                "magenta",
                "chartreuse",
                "yellow",
                "red",
                "cyan",
                "black",
                "blue",
                "red",
            ),
        );

        let mut fonts = BTreeMap::new();
        for (name, family) in [
            ("courier", "Courier"),
            ("courier-new", "Courier New"),
            ("dejavu", "DejaVu Sans Mono"),
            ("liberation", "Liberation Mono"),
            ("nimbus", "Nimbus Mono L"),
            ("helvetica", "Helvetica"),
            ("menlo", "Menlo"),
            ("consolas", "Consolas"),
        ] {
            fonts.insert(name.to_string(), family.to_string());
        }

        Self { themes, fonts }
    }

    /// Built-ins overlaid with the user's custom file, if any.
    ///
    /// A missing or unreadable custom file is not an error; a canonical
    /// `default` theme always exists afterwards.
    pub fn load() -> Self {
        let mut set = Self::builtin();
        if let Some(custom) = io::load_custom() {
            set.merge(custom);
        }
        set.themes
            .entry("default".to_string())
            .or_insert_with(Theme::fallback);
        set
    }

    /// Overlay `other` onto this set; `other` wins on name clashes.
    pub fn merge(&mut self, other: ThemeSet) {
        self.themes.extend(other.themes);
        self.fonts.extend(other.fonts);
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn font(&self, name: &str) -> Option<&str> {
        self.fonts.get(name).map(String::as_str)
    }

    /// Sorted theme names.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// The merged tables as pretty TOML, suitable as a `themes.toml`
    /// starting point.
    pub fn dump(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize themes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_canonical_default() {
        let set = ThemeSet::builtin();
        assert_eq!(set.theme("default"), Some(&Theme::fallback()));
    }

    #[test]
    fn builtin_font_map_resolves_families() {
        let set = ThemeSet::builtin();
        assert_eq!(set.font("courier"), Some("Courier"));
        assert_eq!(set.font("dejavu"), Some("DejaVu Sans Mono"));
        assert_eq!(set.font("missing"), None);
    }

    #[test]
    fn none_theme_has_no_colors() {
        let set = ThemeSet::builtin();
        let none = set.theme("none").unwrap();
        assert_eq!(*none, Theme::default());
    }

    #[test]
    fn highlight_theme_only_colors_marks_and_heads() {
        let set = ThemeSet::builtin();
        let highlight = set.theme("highlight").unwrap();
        assert_eq!(highlight.mark.as_deref(), Some("yellow"));
        assert_eq!(highlight.normal, None);
        assert_eq!(highlight.edge, None);
    }

    #[test]
    fn theme_names_are_sorted() {
        let set = ThemeSet::builtin();
        let names: Vec<&str> = set.theme_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn merge_prefers_the_overlay() {
        let mut set = ThemeSet::builtin();
        let mut custom = ThemeSet::default();
        custom.themes.insert(
            "default".to_string(),
            Theme {
                normal: Some("white".to_string()),
                ..Theme::default()
            },
        );
        set.merge(custom);

        assert_eq!(
            set.theme("default").unwrap().normal.as_deref(),
            Some("white")
        );
        // Untouched built-ins survive the merge.
        assert!(set.theme("midnight").is_some());
    }

    #[test]
    fn dump_round_trips_through_toml() {
        let set = ThemeSet::builtin();
        let dumped = set.dump().unwrap();
        let parsed: ThemeSet = toml::from_str(&dumped).unwrap();
        assert_eq!(parsed.themes, set.themes);
        assert_eq!(parsed.fonts, set.fonts);
    }
}
