//! Machine classification: arcade hardware detection and clone lineage.

use arcade_sift_catalog::MachineRecord;

use crate::config::FilterConfig;
use crate::tables::{
    BOOTLEG_MARKERS, NON_ARCADE_CATEGORY_KEYWORDS, NON_ARCADE_SOURCE_FILES, PROTOTYPE_MARKERS,
};

/// Decide whether a machine is genuine arcade hardware.
///
/// No single catalog field says "arcade", so this combines the machine-nature
/// flags, a denylist of console/computer driver files, and category keywords.
/// The first rule that rejects wins.
pub fn is_arcade_machine(machine: &MachineRecord) -> bool {
    if machine.is_device || machine.is_mechanical || machine.is_bios || !machine.is_runnable {
        return false;
    }

    if let Some(ref source_file) = machine.source_file {
        if NON_ARCADE_SOURCE_FILES.contains(&source_file.as_str()) {
            return false;
        }
    }

    if let Some(ref category) = machine.category {
        let category = category.to_lowercase();
        if NON_ARCADE_CATEGORY_KEYWORDS
            .iter()
            .any(|keyword| category.contains(keyword))
        {
            return false;
        }
    }

    true
}

/// A machine's place in the parent/clone hierarchy.
///
/// Variants are ordered by preference: the derived `Ord` matches [`rank`](Self::rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lineage {
    /// Original release (no `cloneof`)
    Parent,
    /// Official regional or revision variant
    Clone,
    /// Unofficial, pirated or hacked variant
    Bootleg,
    /// Pre-release, beta or demo variant
    Prototype,
}

impl Lineage {
    pub fn rank(&self) -> u8 {
        match self {
            Self::Parent => 0,
            Self::Clone => 1,
            Self::Bootleg => 2,
            Self::Prototype => 3,
        }
    }

    pub fn is_variant(&self) -> bool {
        !matches!(self, Self::Parent)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Clone => "clone",
            Self::Bootleg => "bootleg",
            Self::Prototype => "prototype",
        }
    }

    /// Whether the configuration lets this tier through. Parents always pass.
    pub fn is_included(&self, config: &FilterConfig) -> bool {
        match self {
            Self::Parent => true,
            Self::Clone => config.include_clones(),
            Self::Bootleg => config.include_bootlegs(),
            Self::Prototype => config.include_prototypes(),
        }
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a machine by its `cloneof` reference and description markers.
///
/// Bootleg markers are checked before prototype markers, so a
/// "bootleg of a prototype" counts as a bootleg.
pub fn classify_lineage(machine: &MachineRecord) -> Lineage {
    if machine.clone_of.is_none() {
        return Lineage::Parent;
    }

    let description = machine.description.to_lowercase();
    if BOOTLEG_MARKERS.iter().any(|m| description.contains(m)) {
        Lineage::Bootleg
    } else if PROTOTYPE_MARKERS.iter().any(|m| description.contains(m)) {
        Lineage::Prototype
    } else {
        Lineage::Clone
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
