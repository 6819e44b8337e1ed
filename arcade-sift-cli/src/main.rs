//! arcade-sift CLI
//!
//! Filters a MAME catalog down to one best version per arcade game and copies
//! the ROM, disk and sample sets those games need.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, PresetAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!(
            "{} {e}",
            "error:".if_supports_color(Stderr, |t| t.red()),
        );
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Run { sort, dry_run } => {
            commands::run::run_sort_command(&sort, dry_run, cli.quiet)
        }
        Commands::Locales { catalog } => {
            commands::locales::run_locales(&catalog);
            Ok(())
        }
        Commands::Preset { action } => match action {
            PresetAction::Save { name, sort } => commands::preset::run_preset_save(&name, &sort),
            PresetAction::Show { name } => commands::preset::run_preset_show(&name),
            PresetAction::Path => {
                commands::preset::run_preset_path();
                Ok(())
            }
        },
    }
}

/// Install the logger. Normal output is plain `info` lines on stdout;
/// `--verbose` adds timestamps, levels and debug messages from the library.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env("ARCADE_SIFT_LOG")
        .target(env_logger::Target::Stdout);

    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Error | log::Level::Warn => writeln!(
                buf,
                "{} {}",
                record.level().if_supports_color(owo_colors::Stream::Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    builder.init();
}
