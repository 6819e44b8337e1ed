//! Saved option sets ("presets").
//!
//! A preset is a flat record of filter options plus the run's paths. JSON is
//! the default format and stays readable by older tools using the same keys;
//! a `.toml` extension selects TOML instead.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{FilterConfig, FilterOptions};
use crate::error::PresetError;

/// Extensions recognised for preset files, default first.
pub const PRESET_EXTENSIONS: &[&str] = &["json", "toml"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    /// Catalog XML path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_xml: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rom_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_dir: Option<PathBuf>,
    /// Output root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(flatten)]
    pub options: FilterOptions,
}

impl Preset {
    /// Validate the stored options.
    pub fn filter_config(&self) -> Result<FilterConfig, PresetError> {
        Ok(FilterConfig::try_from(self.options.clone())?)
    }

    pub fn catalog(&self) -> Option<&Path> {
        non_empty(&self.full_xml)
    }

    pub fn rom_dir(&self) -> Option<&Path> {
        non_empty(&self.rom_dir)
    }

    /// The sample directory; an empty string counts as unset.
    pub fn sample_dir(&self) -> Option<&Path> {
        non_empty(&self.sample_dir)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        non_empty(&self.output_path)
    }
}

fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref()
        .filter(|p| !p.as_os_str().is_empty())
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Load a preset, choosing the format from the file extension.
pub fn load_preset(path: &Path) -> Result<Preset, PresetError> {
    let contents = std::fs::read_to_string(path)?;
    let preset = if is_toml(path) {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    log::debug!("Loaded preset {}", path.display());
    Ok(preset)
}

/// Save a preset, choosing the format from the file extension.
///
/// The file is written to a temporary sibling and renamed into place.
pub fn save_preset(path: &Path, preset: &Preset) -> Result<(), PresetError> {
    let serialized = if is_toml(path) {
        toml::to_string_pretty(preset)?
    } else {
        serde_json::to_string_pretty(preset)?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        io::Error::new(e.kind(), format!("{}: {e}", path.display()))
    })?;

    log::debug!("Saved preset {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/preset_tests.rs"]
mod tests;
