//! End-to-end sort run: load, select, log, copy.

use std::path::PathBuf;

use arcade_sift_catalog::parse_catalog_file;

use crate::config::FilterConfig;
use crate::copier::{CopyPaths, CopySummary, copy_assets};
use crate::error::SortError;
use crate::pipeline::{Selection, select_with_progress};
use crate::progress::SortProgress;
use crate::report::{REPORT_FILE_NAME, write_report};

/// Default output folder name, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "filtered_mame_set";

/// File-system locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    /// Catalog XML (`mame -listxml` output)
    pub catalog: PathBuf,
    /// Source ROM directory
    pub rom_dir: PathBuf,
    /// Source sample directory, if any
    pub sample_dir: Option<PathBuf>,
    /// Output root; receives `roms/`, `samples/` and the decision log
    pub output_dir: PathBuf,
}

impl RunPaths {
    pub fn copy_paths(&self) -> CopyPaths {
        CopyPaths {
            rom_dir: self.rom_dir.clone(),
            sample_dir: self.sample_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub selection: Selection,
    /// `None` for a dry run
    pub copy: Option<CopySummary>,
    pub report_path: PathBuf,
}

/// Run the whole sort.
///
/// Fails before any selection when the catalog or ROM directory is missing or
/// the catalog cannot be parsed. With `dry_run`, the decision log is written
/// but nothing is copied and the ROM directory is not required.
pub fn run_sort(
    paths: &RunPaths,
    config: &FilterConfig,
    dry_run: bool,
    progress: &dyn Fn(SortProgress),
) -> Result<RunSummary, SortError> {
    if !paths.catalog.is_file() {
        return Err(SortError::missing_path("Catalog", &paths.catalog));
    }
    if !dry_run && !paths.rom_dir.is_dir() {
        return Err(SortError::missing_path("ROM directory", &paths.rom_dir));
    }

    let copy_paths = paths.copy_paths();
    std::fs::create_dir_all(&paths.output_dir)?;
    if !dry_run {
        std::fs::create_dir_all(copy_paths.output_roms())?;
        std::fs::create_dir_all(copy_paths.output_samples())?;
    }

    log::info!("Parsing catalog {}", paths.catalog.display());
    let catalog = parse_catalog_file(&paths.catalog)?;
    progress(SortProgress::CatalogLoaded {
        entries: catalog.len(),
    });

    let selection = select_with_progress(&catalog, config, progress);

    let report_path = paths.report_path();
    write_report(&selection, &report_path)?;

    let copy = if dry_run {
        None
    } else {
        progress(SortProgress::AssetsPlanned {
            total: selection.asset_count(),
            destination: paths.output_dir.clone(),
        });
        Some(copy_assets(&selection, &copy_paths, progress))
    };

    progress(SortProgress::ReportWritten {
        path: report_path.clone(),
    });

    Ok(RunSummary {
        selection,
        copy,
        report_path,
    })
}
