//! Filter configuration: raw options and the validated snapshot.
//!
//! [`FilterOptions`] is what a front end or preset file produces. It is
//! validated once into a [`FilterConfig`], which the pipeline reads and never
//! mutates.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigIssue, ConfigValidationError};

/// Player/button limits at or above this value mean "no limit".
pub const UNRESTRICTED: i64 = 99;

/// Label that, anywhere in a control or direction list, disables that filter.
const ALL_LABEL: &str = "all";

/// Requested screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl Orientation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Both => "both",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated filter options, in the shape presets store them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Maximum simultaneous players; [`UNRESTRICTED`] or more for all
    #[serde(rename = "players")]
    pub max_players: i64,
    /// Maximum action buttons per player; [`UNRESTRICTED`] or more for all
    pub max_buttons: i64,
    /// Allowed control categories (e.g., "joystick", "trackball"); empty for all
    pub controls: Vec<String>,
    /// Allowed joystick directionalities (e.g., "4-way", "8-way"); empty for all
    pub directions: Vec<String>,
    /// "horizontal", "vertical" or "both"
    pub orientation: String,
    pub working_only: bool,
    #[serde(rename = "mature")]
    pub include_mature: bool,
    pub include_clones: bool,
    pub include_bootlegs: bool,
    pub include_prototypes: bool,
    /// Preferred region tokens, best first
    pub region_order: Vec<String>,
    /// Preferred language tokens, best first
    pub language_order: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_players: UNRESTRICTED,
            max_buttons: UNRESTRICTED,
            controls: Vec::new(),
            directions: Vec::new(),
            orientation: Orientation::Both.as_str().to_string(),
            working_only: true,
            include_mature: false,
            include_clones: false,
            include_bootlegs: false,
            include_prototypes: false,
            region_order: Vec::new(),
            language_order: Vec::new(),
        }
    }
}

/// Validated, immutable filter configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    max_players: Option<u32>,
    max_buttons: Option<u32>,
    controls: Vec<String>,
    directions: Vec<String>,
    orientation: Orientation,
    working_only: bool,
    include_mature: bool,
    include_clones: bool,
    include_bootlegs: bool,
    include_prototypes: bool,
    region_order: Vec<String>,
    language_order: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_players: None,
            max_buttons: None,
            controls: Vec::new(),
            directions: Vec::new(),
            orientation: Orientation::Both,
            working_only: true,
            include_mature: false,
            include_clones: false,
            include_bootlegs: false,
            include_prototypes: false,
            region_order: Vec::new(),
            language_order: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// `None` means any player count is accepted.
    pub fn max_players(&self) -> Option<u32> {
        self.max_players
    }

    /// `None` means any button count is accepted.
    pub fn max_buttons(&self) -> Option<u32> {
        self.max_buttons
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn working_only(&self) -> bool {
        self.working_only
    }

    pub fn include_mature(&self) -> bool {
        self.include_mature
    }

    pub fn include_clones(&self) -> bool {
        self.include_clones
    }

    pub fn include_bootlegs(&self) -> bool {
        self.include_bootlegs
    }

    pub fn include_prototypes(&self) -> bool {
        self.include_prototypes
    }

    pub fn region_order(&self) -> &[String] {
        &self.region_order
    }

    pub fn language_order(&self) -> &[String] {
        &self.language_order
    }
}

impl TryFrom<FilterOptions> for FilterConfig {
    type Error = ConfigValidationError;

    fn try_from(options: FilterOptions) -> Result<Self, Self::Error> {
        let mut issues = Vec::new();

        let max_players = validate_limit("players", options.max_players, 1, &mut issues);
        let max_buttons = validate_limit("max_buttons", options.max_buttons, 0, &mut issues);
        let orientation = Orientation::parse(&options.orientation).unwrap_or_else(|| {
            issues.push(ConfigIssue::UnknownOrientation(options.orientation.clone()));
            Orientation::Both
        });

        if !issues.is_empty() {
            return Err(ConfigValidationError { issues });
        }

        Ok(Self {
            max_players,
            max_buttons,
            controls: normalize_choices(&options.controls),
            directions: normalize_choices(&options.directions),
            orientation,
            working_only: options.working_only,
            include_mature: options.include_mature,
            include_clones: options.include_clones,
            include_bootlegs: options.include_bootlegs,
            include_prototypes: options.include_prototypes,
            region_order: normalize_tokens(&options.region_order),
            language_order: normalize_tokens(&options.language_order),
        })
    }
}

impl From<&FilterConfig> for FilterOptions {
    fn from(config: &FilterConfig) -> Self {
        let limit = |max: Option<u32>| max.map_or(UNRESTRICTED, i64::from);
        Self {
            max_players: limit(config.max_players),
            max_buttons: limit(config.max_buttons),
            controls: config.controls.clone(),
            directions: config.directions.clone(),
            orientation: config.orientation.as_str().to_string(),
            working_only: config.working_only,
            include_mature: config.include_mature,
            include_clones: config.include_clones,
            include_bootlegs: config.include_bootlegs,
            include_prototypes: config.include_prototypes,
            region_order: config.region_order.clone(),
            language_order: config.language_order.clone(),
        }
    }
}

fn validate_limit(
    field: &'static str,
    value: i64,
    min: i64,
    issues: &mut Vec<ConfigIssue>,
) -> Option<u32> {
    if value < min {
        issues.push(ConfigIssue::OutOfRange { field, value, min });
        return None;
    }
    if value >= UNRESTRICTED {
        return None;
    }
    u32::try_from(value).ok()
}

/// Trim and lower-case preference tokens, dropping empty entries.
fn normalize_tokens(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Like [`normalize_tokens`], but an "all" entry clears the list.
fn normalize_choices(values: &[String]) -> Vec<String> {
    let tokens = normalize_tokens(values);
    if tokens.iter().any(|t| t == ALL_LABEL) {
        Vec::new()
    } else {
        tokens
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
