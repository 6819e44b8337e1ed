use std::collections::BTreeSet;

/// A parsed machine catalog (the output of `mame -listxml`).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub machines: Vec<MachineRecord>,
}

impl Catalog {
    pub fn new(machines: Vec<MachineRecord>) -> Self {
        Self { machines }
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MachineRecord> {
        self.machines.iter()
    }
}

impl FromIterator<MachineRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = MachineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A single `<machine>` (or legacy `<game>`) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord {
    /// Short name, the primary key within a catalog (e.g., "sf2").
    pub name: String,
    /// Display title, usually with parenthesised tags (e.g., "Street Fighter II (World 910522)").
    pub description: String,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub is_device: bool,
    pub is_mechanical: bool,
    pub is_bios: bool,
    /// `false` only when the catalog says `runnable="no"`.
    pub is_runnable: bool,
    /// Driver source file implementing the machine (e.g., "capcom/cps1.cpp").
    pub source_file: Option<String>,
    pub category: Option<String>,
    /// Parent set this machine is a clone of.
    pub clone_of: Option<String>,
    /// Set whose ROMs this machine needs (parent or BIOS).
    pub rom_of: Option<String>,
    /// Machine whose sample set this machine shares.
    pub sample_of: Option<String>,
    /// Driver emulation status ("good", "imperfect", "preliminary").
    pub driver_status: Option<String>,
    pub display: Option<Display>,
    pub input: Option<Input>,
    /// `<control>` elements placed directly under the machine by older catalogs.
    pub loose_controls: Vec<Control>,
    /// Disk image names, without extension.
    pub disks: Vec<String>,
    /// Sample names, without extension.
    pub samples: Vec<String>,
}

impl Default for MachineRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            year: None,
            manufacturer: None,
            is_device: false,
            is_mechanical: false,
            is_bios: false,
            is_runnable: true,
            source_file: None,
            category: None,
            clone_of: None,
            rom_of: None,
            sample_of: None,
            driver_status: None,
            display: None,
            input: None,
            loose_controls: Vec::new(),
            disks: Vec::new(),
            samples: Vec::new(),
        }
    }
}

impl MachineRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn all_controls(&self) -> impl Iterator<Item = &Control> {
        self.input
            .iter()
            .flat_map(|input| input.controls.iter())
            .chain(self.loose_controls.iter())
    }

    /// Distinct, lower-cased control type tokens (e.g., "joy", "trackball").
    pub fn control_types(&self) -> BTreeSet<String> {
        self.all_controls()
            .filter(|c| !c.kind.is_empty())
            .map(|c| c.kind.to_lowercase())
            .collect()
    }

    /// Distinct, lower-cased joystick directionality tokens (e.g., "8", "4").
    pub fn control_ways(&self) -> BTreeSet<String> {
        self.all_controls()
            .filter_map(|c| c.ways.as_deref())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Screen information from the first `<display>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Display {
    /// Rotation in degrees (0, 90, 180, 270).
    pub rotation: u32,
}

impl Display {
    pub fn is_vertical(&self) -> bool {
        matches!(self.rotation, 90 | 270)
    }
}

/// Cabinet input description from `<input>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    /// `None` when the attribute is missing or not a number.
    pub players: Option<u32>,
    /// `None` when the attribute is missing or not a number.
    pub buttons: Option<u32>,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Control {
    /// Control type as written in the catalog ("joy", "dial", "lightgun", ...).
    pub kind: String,
    pub ways: Option<String>,
}

impl Control {
    pub fn new(kind: impl Into<String>, ways: Option<&str>) -> Self {
        Self {
            kind: kind.into(),
            ways: ways.map(str::to_string),
        }
    }
}
