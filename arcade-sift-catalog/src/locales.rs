//! Harvests region and language tokens from machine descriptions.
//!
//! Descriptions carry locale information in parenthesised, comma-separated
//! groups, e.g. `"Street Fighter II (USA, Japan) (Rev A)"`. The scan collects
//! every part that matches a known region or language so a front end can
//! offer them as preference choices.

use std::collections::BTreeSet;
use std::path::Path;

use crate::machine::Catalog;
use crate::parser::parse_catalog_file;

/// Language tokens recognised in description tags (names and ISO codes).
pub const KNOWN_LANGUAGES: &[&str] = &[
    "english", "japanese", "spanish", "french", "german", "italian", "korean", "chinese", "dutch",
    "en", "ja", "es", "fr", "de", "it", "ko", "zh", "nl",
];

/// Region tokens recognised in description tags, including single-letter codes.
pub const KNOWN_REGIONS: &[&str] = &[
    "argentina", "asia", "australia", "austria", "belgium", "brazil", "canada", "china",
    "denmark", "europe", "euro", "finland", "france", "germany", "greece", "hispanic",
    "hong kong", "ireland", "italy", "japan", "korea", "netherlands", "new zealand", "norway",
    "poland", "portugal", "russia", "scandinavia", "singapore", "spain", "sweden",
    "switzerland", "taiwan", "uk", "usa", "us", "world", "w", "j", "u", "e", "a",
];

/// Region and language tokens observed in a catalog, sorted and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleScan {
    pub regions: Vec<String>,
    pub languages: Vec<String>,
}

impl LocaleScan {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.languages.is_empty()
    }
}

/// Collect the locale tokens used in the catalog's descriptions.
///
/// A part is classified as a language first, then as a region; anything else
/// (revisions, dates, version strings) is ignored.
pub fn scan_locales(catalog: &Catalog) -> LocaleScan {
    let mut regions = BTreeSet::new();
    let mut languages = BTreeSet::new();

    for machine in catalog.iter() {
        for group in paren_groups(&machine.description) {
            for part in group.split(',') {
                let part = part.trim().to_lowercase();
                if part.is_empty() {
                    continue;
                }
                if KNOWN_LANGUAGES.contains(&part.as_str()) {
                    languages.insert(part);
                } else if KNOWN_REGIONS.contains(&part.as_str()) {
                    regions.insert(part);
                }
            }
        }
    }

    LocaleScan {
        regions: regions.into_iter().collect(),
        languages: languages.into_iter().collect(),
    }
}

/// Load a catalog file and scan it for locale tokens.
///
/// The scan only feeds preference lists, so an unreadable catalog yields an
/// empty scan and a warning instead of an error.
pub fn scan_catalog_locales(path: &Path) -> LocaleScan {
    match parse_catalog_file(path) {
        Ok(catalog) => scan_locales(&catalog),
        Err(e) => {
            log::warn!("Could not scan {} for locales: {}", path.display(), e);
            LocaleScan::default()
        }
    }
}

/// Contents of each `(...)` group, shortest match first.
///
/// `"A (B (C) D)"` yields `"B (C"`, which mirrors how the tags are written in
/// practice: groups are never nested.
fn paren_groups(text: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(')') else {
            break;
        };
        groups.push(&after[..close]);
        rest = &after[close + 1..];
    }
    groups
}

#[cfg(test)]
#[path = "tests/locales_tests.rs"]
mod tests;
