//! Fixed lookup tables used by the classifiers and filters.

/// Driver source files implementing home consoles, handhelds and computers.
pub const NON_ARCADE_SOURCE_FILES: &[&str] = &[
    // Consoles & handhelds
    "genesis.cpp",
    "nes.cpp",
    "snes.cpp",
    "gamegear.cpp",
    "gameboy.cpp",
    "lynx.cpp",
    "pce.cpp",
    "a2600.cpp",
    "coleco.cpp",
    "intv.cpp",
    "odyssey2.cpp",
    "vectrex.cpp",
    // Handheld LCD games
    "hh_tms.cpp",
    "hh_sm510.cpp",
    // Computers
    "msx.cpp",
    "spectrum.cpp",
    "c64.cpp",
    "amiga.cpp",
    "ti99.cpp",
    "x1.cpp",
    "coco.cpp",
    "apple2.cpp",
    "mac.cpp",
    "pc.cpp",
    "fm7.cpp",
];

/// Category substrings marking non-arcade hardware.
pub const NON_ARCADE_CATEGORY_KEYWORDS: &[&str] = &["console", "handheld", "computer", "system"];

/// Substrings of category/description marking adult content.
pub const MATURE_MARKERS: &[&str] = &[
    "mature",
    "adult",
    "mahjong (strip)",
    "erotic",
    "nsfw",
    "xxx",
    "(nude)",
];

/// Description substrings marking an unofficial variant.
pub const BOOTLEG_MARKERS: &[&str] = &["bootleg", "hack"];

/// Description substrings marking a pre-release variant.
pub const PROTOTYPE_MARKERS: &[&str] = &["prototype", "beta", "demo"];

/// Driver statuses accepted by the working-only filter.
pub const WORKING_STATUSES: &[&str] = &["good", "perfect"];

/// Control category label → substrings of the catalog's control `type`.
pub const CONTROL_KEYWORDS: &[(&str, &[&str])] = &[
    ("joystick", &["joy", "joystick"]),
    ("trackball", &["trackball"]),
    ("spinner", &["spinner"]),
    ("dial", &["dial"]),
    ("paddle", &["paddle"]),
    ("lightgun", &["lightgun", "gun"]),
    ("positional", &["positional"]),
    ("mouse", &["mouse"]),
    ("pedal", &["pedal"]),
    ("stick (analog)", &["analog"]),
    ("keyboard", &["keyboard"]),
    ("buttons only", &["buttons only"]),
    ("other", &["other"]),
];

/// Direction label → substrings of the catalog's control `ways`.
pub const DIRECTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("4-way", &["4"]),
    ("8-way", &["8"]),
    ("2-way horizontal", &["2h", "2-h", "2 horizontal"]),
    ("2-way vertical", &["2v", "2-v", "2 vertical"]),
    ("49-way", &["49"]),
    ("rotary", &["rotary", "12-way"]),
    ("analog", &["analog"]),
];

/// Keywords for a label, or `None` when the label is not in `table`.
pub fn keywords_for(
    table: &'static [(&'static str, &'static [&'static str])],
    label: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, keywords)| *keywords)
}

/// Control category labels, in display order.
pub fn control_labels() -> impl Iterator<Item = &'static str> {
    CONTROL_KEYWORDS.iter().map(|(label, _)| *label)
}

/// Direction labels, in display order.
pub fn direction_labels() -> impl Iterator<Item = &'static str> {
    DIRECTION_KEYWORDS.iter().map(|(label, _)| *label)
}
