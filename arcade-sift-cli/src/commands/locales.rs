use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_sift_catalog::scan_catalog_locales;

/// Print the region and language tags observed in a catalog's descriptions.
pub(crate) fn run_locales(catalog: &Path) {
    let scan = scan_catalog_locales(catalog);
    if scan.is_empty() {
        log::warn!("No region or language tags found in {}", catalog.display());
        return;
    }

    log::info!(
        "{} ({})",
        "Regions".if_supports_color(Stdout, |t| t.bold()),
        scan.regions.len(),
    );
    log::info!("  {}", scan.regions.join(", "));
    log::info!("");
    log::info!(
        "{} ({})",
        "Languages".if_supports_color(Stdout, |t| t.bold()),
        scan.languages.len(),
    );
    log::info!("  {}", scan.languages.join(", "));
}
