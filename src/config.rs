//! Loading fix options from disk.

use anyhow::{Context, Result};
use awaitfix_fixes::FixOptions;
use std::path::Path;
use tracing::debug;

/// Read `FixOptions` from a JSON file. Missing fields take their defaults.
pub fn load_options(path: &Path) -> Result<FixOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    let options = FixOptions::from_json(&text)
        .with_context(|| format!("failed to parse options file {}", path.display()))?;
    debug!(path = %path.display(), ?options, "loaded fix options");
    Ok(options)
}

/// `load_options` when a path is given, defaults otherwise.
pub fn load_options_or_default(path: Option<&Path>) -> Result<FixOptions> {
    match path {
        Some(path) => load_options(path),
        None => Ok(FixOptions::default()),
    }
}
