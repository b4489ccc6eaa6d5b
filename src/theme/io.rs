//! Custom-theme persistence.
//!
//! Custom themes live in `themes.toml` under `$XDG_DATA_HOME/triedot`
//! (falling back to `~/.local/share/triedot`) and overlay the built-in
//! tables at startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::{Theme, ThemeSet};

/// The support directory for custom themes.
pub fn data_dir() -> Option<PathBuf> {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join("triedot")),
        _ => dirs::home_dir().map(|home| home.join(".local").join("share").join("triedot")),
    }
}

/// Path of the custom themes file, if a support directory can be resolved.
pub fn themes_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("themes.toml"))
}

/// Load the custom theme file, or `None` if absent or unusable.
///
/// A broken custom file must never stop the run; it is logged and ignored.
pub(super) fn load_custom() -> Option<ThemeSet> {
    let path = themes_path()?;
    if !path.exists() {
        return None;
    }

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), %err, "could not read custom themes");
            return None;
        }
    };

    match toml::from_str(&contents) {
        Ok(set) => Some(set),
        Err(err) => {
            debug!(path = %path.display(), %err, "could not parse custom themes");
            None
        }
    }
}

/// Save `theme` under `name` in the custom themes file.
///
/// Existing custom themes are preserved; an existing entry with the same
/// name is replaced. Returns the file written.
pub fn save_theme(name: &str, theme: &Theme) -> Result<PathBuf> {
    let path = themes_path().context("Could not determine data directory")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
    }

    let mut custom = load_custom().unwrap_or_default();
    custom.themes.insert(name.to_string(), theme.clone());

    let contents =
        toml::to_string_pretty(&custom).context("Failed to serialize custom themes")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write themes file: {:?}", path))?;

    Ok(path)
}
