//! File I/O for native CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tagfield_core::{FieldConfig, Suggestion, Tag};

/// Get the ~/.tagfield directory path, creating it if needed
pub fn tagfield_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let tagfield_dir = home.join(".tagfield");

    if !tagfield_dir.exists() {
        fs::create_dir_all(&tagfield_dir)
            .with_context(|| format!("Failed to create {}", tagfield_dir.display()))?;
    }

    Ok(tagfield_dir)
}

/// Default config location: ~/.config/tagfield/config.toml
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join("tagfield").join("config.toml"))
}

/// Load configuration from `path`, else from the default location if it
/// exists, else defaults. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<FieldConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FieldConfig::default()),
        },
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    FieldConfig::from_toml(&source).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Load suggestions: a JSON array for `.json` files, one per line otherwise
pub fn load_suggestions(path: &Path) -> Result<Vec<Suggestion>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suggestions: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        return serde_json::from_str(&content)
            .with_context(|| format!("Invalid suggestions JSON: {}", path.display()));
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Suggestion::from)
        .collect())
}

/// Load initial tags from a JSON array. Tags without an id are numbered.
pub fn load_tags(path: &Path) -> Result<Vec<Tag>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tags: {}", path.display()))?;
    let mut tags: Vec<Tag> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid tags JSON: {}", path.display()))?;

    for (i, tag) in tags.iter_mut().enumerate() {
        if tag.id.is_empty() {
            tag.id = format!("tag-{}", i + 1);
        }
    }
    Ok(tags)
}
