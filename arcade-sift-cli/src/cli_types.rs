//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use arcade_sift_lib::config::UNRESTRICTED;

#[derive(Parser)]
#[command(name = "arcade-sift")]
#[command(about = "Build a curated arcade set from a MAME catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Filter the catalog, write the decision log and copy the selected sets
    Run {
        #[command(flatten)]
        sort: SortArgs,

        /// Write the decision log without copying anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List the region and language tags found in a catalog
    Locales {
        /// Catalog XML (`mame -listxml` output)
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Manage saved option presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum PresetAction {
    /// Save the given options as a preset (a bare name goes to the presets folder)
    Save {
        /// Preset name or file path (.json or .toml)
        name: String,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Print a preset and the configuration it validates to
    Show {
        /// Preset name or file path
        name: String,
    },

    /// Print the presets folder path
    Path,
}

/// Paths and filter options shared by `run` and `preset save`.
///
/// Every option is optional so that, when `--preset` is given, only the
/// options actually passed override the preset.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SortArgs {
    /// Start from a saved preset (name or file path)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Catalog XML (`mame -listxml` output) [default: full.xml]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Source ROM folder [default: current directory]
    #[arg(long)]
    pub roms: Option<PathBuf>,

    /// Source samples folder
    #[arg(long)]
    pub samples: Option<PathBuf>,

    /// Output folder [default: filtered_mame_set]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Maximum simultaneous players (number or "all")
    #[arg(long, value_parser = parse_limit)]
    pub max_players: Option<i64>,

    /// Maximum action buttons per player (number or "all")
    #[arg(long, value_parser = parse_limit)]
    pub max_buttons: Option<i64>,

    /// Allowed control types (e.g., joystick,trackball,lightgun or "all")
    #[arg(long, value_delimiter = ',')]
    pub controls: Option<Vec<String>>,

    /// Allowed joystick directions (e.g., 4-way,8-way or "all")
    #[arg(long, value_delimiter = ',')]
    pub directions: Option<Vec<String>>,

    /// Screen orientation: horizontal, vertical or both
    #[arg(long)]
    pub orientation: Option<String>,

    /// Keep machines whose driver is not marked working
    #[arg(long)]
    pub any_status: bool,

    /// Keep mature/adult titles
    #[arg(long)]
    pub mature: bool,

    /// Keep official clones (other regions and revisions)
    #[arg(long)]
    pub clones: bool,

    /// Keep bootlegs and hacks
    #[arg(long)]
    pub bootlegs: bool,

    /// Keep prototypes and demos
    #[arg(long)]
    pub prototypes: bool,

    /// Preferred regions, best first (e.g., usa,world,europe)
    #[arg(long, value_delimiter = ',')]
    pub regions: Option<Vec<String>>,

    /// Preferred languages, best first (e.g., english,japanese)
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,
}

/// Parse a player/button limit: a number, or "all" for no limit.
fn parse_limit(value: &str) -> Result<i64, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("all") {
        return Ok(UNRESTRICTED);
    }
    value
        .parse::<i64>()
        .map_err(|_| format!("expected a number or \"all\", got \"{value}\""))
}
