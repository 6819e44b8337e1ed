//! Shared locations (config directory, saved presets).
//!
//! Presets live in `~/.config/arcade-sift/presets/` so they can be referred to
//! by bare name from any working directory.

use std::path::{Path, PathBuf};

use crate::preset::PRESET_EXTENSIONS;

/// `~/.config/arcade-sift`, or `./arcade-sift` when no config dir exists.
pub fn config_dir() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("arcade-sift")
}

/// Directory holding named presets.
pub fn presets_dir() -> PathBuf {
    config_dir().join("presets")
}

/// Resolve a preset argument to a file path.
///
/// Anything that looks like a path (has an extension or a separator, or
/// exists) is used as-is. A bare name is looked up in [`presets_dir`].
pub fn resolve_preset_path(name_or_path: &str) -> PathBuf {
    resolve_preset_in(&presets_dir(), name_or_path)
}

fn resolve_preset_in(dir: &Path, name_or_path: &str) -> PathBuf {
    let candidate = Path::new(name_or_path);
    let looks_like_path = candidate.extension().is_some()
        || candidate.components().count() > 1
        || candidate.exists();
    if looks_like_path {
        return candidate.to_path_buf();
    }

    PRESET_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name_or_path}.{ext}")))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(format!("{name_or_path}.{}", PRESET_EXTENSIONS[0])))
}
