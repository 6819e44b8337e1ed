use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_sift_lib::settings::{presets_dir, resolve_preset_path};
use arcade_sift_lib::{load_preset, save_preset};

use crate::cli_types::SortArgs;
use crate::commands::{build_preset, warn_unknown_labels};
use crate::error::CliError;

/// Validate the options and write them as a preset.
pub(crate) fn run_preset_save(name: &str, args: &SortArgs) -> Result<(), CliError> {
    let preset = build_preset(args)?;
    // refuse to save something `run` would reject
    let config = preset.filter_config()?;
    warn_unknown_labels(&config);

    let path = resolve_preset_path(name);
    save_preset(&path, &preset)?;
    log::info!(
        "{} Preset saved: {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Print a preset's paths and its normalized options.
pub(crate) fn run_preset_show(name: &str) -> Result<(), CliError> {
    let path = resolve_preset_path(name);
    let preset = load_preset(&path)?;
    let config = preset.filter_config()?;

    log::info!(
        "{}",
        path.display().if_supports_color(Stdout, |t| t.bold()),
    );
    let show_path = |label: &str, value: Option<&std::path::Path>| {
        let value = value.map_or_else(|| "(default)".to_string(), |p| p.display().to_string());
        log::info!("  {label:<13} {value}");
    };
    show_path("catalog", preset.catalog());
    show_path("roms", preset.rom_dir());
    show_path("samples", preset.sample_dir());
    show_path("output", preset.output_dir());

    let limit = |max: Option<u32>| max.map_or_else(|| "all".to_string(), |n| n.to_string());
    let list = |values: &[String]| {
        if values.is_empty() {
            "all".to_string()
        } else {
            values.join(", ")
        }
    };
    log::info!("  {:<13} {}", "players", limit(config.max_players()));
    log::info!("  {:<13} {}", "buttons", limit(config.max_buttons()));
    log::info!("  {:<13} {}", "controls", list(config.controls()));
    log::info!("  {:<13} {}", "directions", list(config.directions()));
    log::info!("  {:<13} {}", "orientation", config.orientation());
    log::info!("  {:<13} {}", "working only", config.working_only());
    log::info!("  {:<13} {}", "mature", config.include_mature());
    log::info!("  {:<13} {}", "clones", config.include_clones());
    log::info!("  {:<13} {}", "bootlegs", config.include_bootlegs());
    log::info!("  {:<13} {}", "prototypes", config.include_prototypes());
    log::info!("  {:<13} {}", "regions", list(config.region_order()));
    log::info!("  {:<13} {}", "languages", list(config.language_order()));
    Ok(())
}

pub(crate) fn run_preset_path() {
    println!("{}", presets_dir().display());
}
