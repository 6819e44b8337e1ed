//! Attribute filters over a single machine.
//!
//! Every filter is a pure predicate of the configuration and the machine, and
//! fails open: missing or unparsable catalog data never rejects a machine on
//! its own.

use std::collections::BTreeSet;

use arcade_sift_catalog::MachineRecord;

use crate::config::{FilterConfig, Orientation};
use crate::tables::{
    CONTROL_KEYWORDS, DIRECTION_KEYWORDS, MATURE_MARKERS, WORKING_STATUSES, keywords_for,
};

/// The attribute filters, in the order the pipeline applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeFilter {
    Working,
    Mature,
    Orientation,
    Players,
    Buttons,
    Controls,
    Directions,
}

impl AttributeFilter {
    pub const ALL: [AttributeFilter; 7] = [
        Self::Working,
        Self::Mature,
        Self::Orientation,
        Self::Players,
        Self::Buttons,
        Self::Controls,
        Self::Directions,
    ];

    pub fn passes(&self, config: &FilterConfig, machine: &MachineRecord) -> bool {
        match self {
            Self::Working => working_ok(config, machine),
            Self::Mature => mature_ok(config, machine),
            Self::Orientation => orientation_ok(config, machine),
            Self::Players => players_ok(config, machine),
            Self::Buttons => buttons_ok(config, machine),
            Self::Controls => controls_ok(config, machine),
            Self::Directions => directions_ok(config, machine),
        }
    }
}

/// The first filter (in pipeline order) that rejects the machine.
pub fn first_failure(config: &FilterConfig, machine: &MachineRecord) -> Option<AttributeFilter> {
    AttributeFilter::ALL
        .into_iter()
        .find(|filter| !filter.passes(config, machine))
}

pub fn working_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    if !config.working_only() {
        return true;
    }
    match machine.driver_status {
        None => true,
        Some(ref status) => {
            let status = status.trim().to_lowercase();
            status.is_empty() || WORKING_STATUSES.contains(&status.as_str())
        }
    }
}

pub fn mature_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    let blob = format!(
        "{} {}",
        machine.category.as_deref().unwrap_or_default(),
        machine.description
    )
    .to_lowercase();

    if MATURE_MARKERS.iter().any(|marker| blob.contains(marker)) {
        config.include_mature()
    } else {
        true
    }
}

pub fn orientation_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    let Some(display) = machine.display else {
        return true;
    };
    match config.orientation() {
        Orientation::Both => true,
        Orientation::Vertical => display.is_vertical(),
        Orientation::Horizontal => !display.is_vertical(),
    }
}

pub fn players_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    within_limit(
        config.max_players(),
        machine.input.as_ref().and_then(|input| input.players),
    )
}

pub fn buttons_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    within_limit(
        config.max_buttons(),
        machine.input.as_ref().and_then(|input| input.buttons),
    )
}

fn within_limit(limit: Option<u32>, count: Option<u32>) -> bool {
    match (limit, count) {
        (Some(limit), Some(count)) => count <= limit,
        _ => true,
    }
}

pub fn controls_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    if config.controls().is_empty() {
        return true;
    }
    let observed = machine.control_types();
    if observed.is_empty() {
        return true;
    }
    any_keyword_matches(CONTROL_KEYWORDS, config.controls(), &observed)
}

pub fn directions_ok(config: &FilterConfig, machine: &MachineRecord) -> bool {
    if config.directions().is_empty() {
        return true;
    }
    let observed = machine.control_ways();
    if observed.is_empty() {
        return true;
    }
    any_keyword_matches(DIRECTION_KEYWORDS, config.directions(), &observed)
}

/// True if any requested label's keywords appear inside any observed token.
/// Labels missing from `table` act as their own keyword.
fn any_keyword_matches(
    table: &'static [(&'static str, &'static [&'static str])],
    wanted: &[String],
    observed: &BTreeSet<String>,
) -> bool {
    wanted.iter().any(|label| {
        let own = [label.as_str()];
        let keywords = match keywords_for(table, label) {
            Some(keywords) => keywords,
            None => &own[..],
        };
        observed
            .iter()
            .any(|token| keywords.iter().any(|kw| token.contains(kw)))
    })
}

#[cfg(test)]
#[path = "tests/filters_tests.rs"]
mod tests;
