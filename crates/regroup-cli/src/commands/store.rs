//! Structure file I/O
//!
//! Files hold a JSON array of arrays of strings, e.g. `[["a","b"],[]]`.

use std::fs;
use std::path::Path;

use regroup_core::{Result, Structure};

pub fn load(path: &Path) -> Result<Structure<String>> {
    let text = fs::read_to_string(path)?;
    let structure = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded structure");
    Ok(structure)
}

pub fn save(path: &Path, structure: &Structure<String>, pretty: bool) -> Result<()> {
    let mut text = if pretty {
        serde_json::to_string_pretty(structure)?
    } else {
        serde_json::to_string(structure)?
    };
    text.push('\n');
    fs::write(path, text)?;
    tracing::debug!(path = %path.display(), "saved structure");
    Ok(())
}
