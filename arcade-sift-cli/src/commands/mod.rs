pub(crate) mod locales;
pub(crate) mod preset;
pub(crate) mod run;

use std::path::PathBuf;

use arcade_sift_lib::runner::DEFAULT_OUTPUT_DIR;
use arcade_sift_lib::settings::resolve_preset_path;
use arcade_sift_lib::tables::{control_labels, direction_labels};
use arcade_sift_lib::{FilterConfig, Preset, RunPaths, load_preset};

use crate::cli_types::SortArgs;
use crate::error::CliError;

/// Catalog file looked up in the working directory when none is given.
const DEFAULT_CATALOG: &str = "full.xml";

/// Load the base preset named by `--preset` (if any) and apply the
/// command-line overrides on top.
pub(crate) fn build_preset(args: &SortArgs) -> Result<Preset, CliError> {
    let mut preset = match args.preset {
        Some(ref name) => {
            let path = resolve_preset_path(name);
            log::debug!("Loading preset {}", path.display());
            load_preset(&path)?
        }
        None => Preset::default(),
    };
    apply_overrides(&mut preset, args);
    Ok(preset)
}

fn apply_overrides(preset: &mut Preset, args: &SortArgs) {
    if let Some(ref catalog) = args.catalog {
        preset.full_xml = Some(catalog.clone());
    }
    if let Some(ref roms) = args.roms {
        preset.rom_dir = Some(roms.clone());
    }
    if let Some(ref samples) = args.samples {
        preset.sample_dir = Some(samples.clone());
    }
    if let Some(ref output) = args.output {
        preset.output_path = Some(output.clone());
    }

    let filters = &args.filters;
    let options = &mut preset.options;
    if let Some(max) = filters.max_players {
        options.max_players = max;
    }
    if let Some(max) = filters.max_buttons {
        options.max_buttons = max;
    }
    if let Some(ref controls) = filters.controls {
        options.controls = controls.clone();
    }
    if let Some(ref directions) = filters.directions {
        options.directions = directions.clone();
    }
    if let Some(ref orientation) = filters.orientation {
        options.orientation = orientation.clone();
    }
    if let Some(ref regions) = filters.regions {
        options.region_order = regions.clone();
    }
    if let Some(ref languages) = filters.languages {
        options.language_order = languages.clone();
    }

    // Switches only ever widen the selection.
    options.working_only &= !filters.any_status;
    options.include_mature |= filters.mature;
    options.include_clones |= filters.clones;
    options.include_bootlegs |= filters.bootlegs;
    options.include_prototypes |= filters.prototypes;
}

/// Warn about control or direction choices that have no keyword table entry.
/// They still match, but only as a literal substring of the catalog value.
pub(crate) fn warn_unknown_labels(config: &FilterConfig) {
    for label in unknown_labels(config.controls(), control_labels()) {
        log::warn!(
            "Unknown control '{label}', matching it literally (known: {})",
            control_labels().collect::<Vec<_>>().join(", "),
        );
    }
    for label in unknown_labels(config.directions(), direction_labels()) {
        log::warn!(
            "Unknown direction '{label}', matching it literally (known: {})",
            direction_labels().collect::<Vec<_>>().join(", "),
        );
    }
}

fn unknown_labels<'a>(
    wanted: &'a [String],
    known: impl Iterator<Item = &'static str>,
) -> Vec<&'a str> {
    let known: Vec<&str> = known.collect();
    wanted
        .iter()
        .map(String::as_str)
        .filter(|label| !known.contains(label))
        .collect()
}

/// Run locations from a preset, falling back to the working-directory defaults.
pub(crate) fn run_paths(preset: &Preset) -> RunPaths {
    RunPaths {
        catalog: preset
            .catalog()
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG), PathBuf::from),
        rom_dir: preset
            .rom_dir()
            .map_or_else(|| PathBuf::from("."), PathBuf::from),
        sample_dir: preset.sample_dir().map(PathBuf::from),
        output_dir: preset
            .output_dir()
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from),
    }
}
