use std::sync::mpsc;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_sift_lib::{RunSummary, SortProgress, run_sort};

use crate::cli_types::SortArgs;
use crate::commands::{build_preset, run_paths, warn_unknown_labels};
use crate::error::CliError;

/// Kept machines listed in the terminal summary; the decision log has them all.
const SUMMARY_PREVIEW: usize = 10;

pub(crate) fn run_sort_command(args: &SortArgs, dry_run: bool, quiet: bool) -> Result<(), CliError> {
    let preset = build_preset(args)?;
    let config = preset.filter_config()?;
    warn_unknown_labels(&config);
    let paths = run_paths(&preset);

    log::info!(
        "Catalog: {}",
        paths.catalog.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "ROMs:    {}",
        paths.rom_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(ref samples) = paths.sample_dir {
        log::info!(
            "Samples: {}",
            samples.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    log::info!(
        "Output:  {}",
        paths.output_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: only the decision log will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("/-\\|"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Parsing catalog...");
        pb
    };

    // The sort runs on a worker thread; events are drained here in order.
    let (tx, rx) = mpsc::channel::<SortProgress>();
    let worker = {
        let paths = paths.clone();
        std::thread::spawn(move || {
            run_sort(&paths, &config, dry_run, &|event| {
                let _ = tx.send(event);
            })
        })
    };

    for event in rx {
        show_progress(&pb, &event);
    }
    pb.finish_and_clear();

    let summary = worker
        .join()
        .map_err(|_| CliError::worker("sort worker panicked"))??;
    print_summary(&summary);
    Ok(())
}

fn show_progress(pb: &ProgressBar, event: &SortProgress) {
    if let SortProgress::CopyFailed { .. } = event {
        pb.suspend(|| {
            log::warn!(
                "  {} {}",
                "\u{2716}".if_supports_color(Stdout, |t| t.red()),
                event.message(),
            )
        });
        return;
    }

    pb.suspend(|| log::info!("{}", event.message()));
    if let Some(message) = spinner_message(event) {
        pb.set_message(message);
    }
}

/// What the spinner shows while the step after `event` runs. `None` keeps
/// the current message.
fn spinner_message(event: &SortProgress) -> Option<String> {
    match event {
        SortProgress::CatalogLoaded { .. } => Some("Filtering...".to_string()),
        SortProgress::Matched { .. } => Some("Ranking...".to_string()),
        SortProgress::Deduplicated { .. } => Some("Writing decision log...".to_string()),
        SortProgress::AssetsPlanned { total, .. } => Some(format!("Copying {total} assets...")),
        SortProgress::CopyFailed { .. }
        | SortProgress::CopyFinished { .. }
        | SortProgress::ReportWritten { .. } => None,
    }
}

fn print_summary(summary: &RunSummary) {
    let selection = &summary.selection;

    log::info!("");
    log::info!(
        "{} {} of {} machines kept",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        selection.kept.len().if_supports_color(Stdout, |t| t.bold()),
        selection.total_parsed,
    );
    for (label, count) in selection.tally.by_label() {
        log::info!(
            "  {}",
            format!("skipped {label}: {count}").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for (i, kept) in selection.kept.iter().take(SUMMARY_PREVIEW).enumerate() {
        log::info!(
            "  {:>3}. {} {}",
            i + 1,
            kept.name.if_supports_color(Stdout, |t| t.bold()),
            kept.description.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if selection.kept.len() > SUMMARY_PREVIEW {
        log::info!(
            "  {}",
            format!("... and {} more", selection.kept.len() - SUMMARY_PREVIEW)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    log::info!(
        "  ROM sets: {}, disk images: {}, sample sets: {}",
        selection.roms.len(),
        selection.disks.len(),
        selection.samples.len(),
    );

    if let Some(ref copy) = summary.copy {
        log::info!(
            "  Copied {}, {} not found, {} failed",
            copy.copied.if_supports_color(Stdout, |t| t.green()),
            copy.missing.if_supports_color(Stdout, |t| t.yellow()),
            copy.failed.len().if_supports_color(Stdout, |t| t.red()),
        );
    }
    log::info!(
        "  Decision log: {}",
        summary.report_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
