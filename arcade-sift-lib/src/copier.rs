//! Materializes a selection as a `roms/` + `samples/` directory tree.

use std::path::{Path, PathBuf};

use crate::pipeline::Selection;
use crate::progress::{AssetKind, SortProgress};

/// Archive extensions probed for ROM and sample sets, in order.
pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "7z"];

/// Source and destination directories for the copy step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPaths {
    /// Source ROM directory (archives plus per-machine disk folders)
    pub rom_dir: PathBuf,
    /// Source sample directory; samples are skipped when absent
    pub sample_dir: Option<PathBuf>,
    /// Root of the output tree
    pub output_dir: PathBuf,
}

impl CopyPaths {
    pub fn output_roms(&self) -> PathBuf {
        self.output_dir.join("roms")
    }

    pub fn output_samples(&self) -> PathBuf {
        self.output_dir.join("samples")
    }
}

/// Summary of a copy operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Files copied
    pub copied: usize,
    /// Assets with no source file
    pub missing: usize,
    /// One message per asset whose copy failed
    pub failed: Vec<String>,
}

/// Copy every asset of the selection into the output tree.
///
/// Missing sources are counted and skipped; copy errors are reported through
/// `progress` and recorded without stopping the batch.
pub fn copy_assets(
    selection: &Selection,
    paths: &CopyPaths,
    progress: &dyn Fn(SortProgress),
) -> CopySummary {
    let mut summary = CopySummary::default();
    let out_roms = paths.output_roms();
    let out_samples = paths.output_samples();

    for name in &selection.roms {
        let source = find_archive(&paths.rom_dir, name);
        copy_asset(AssetKind::Rom, name, source, &out_roms, &mut summary, progress);
    }

    for disk in &selection.disks {
        let source = paths.rom_dir.join(disk);
        let source = source.is_file().then_some(source);
        let dest_dir = match Path::new(disk).parent() {
            Some(machine_dir) => out_roms.join(machine_dir),
            None => out_roms.clone(),
        };
        copy_asset(AssetKind::Disk, disk, source, &dest_dir, &mut summary, progress);
    }

    match paths.sample_dir {
        Some(ref sample_dir) if sample_dir.is_dir() => {
            for name in &selection.samples {
                let source = find_archive(sample_dir, name);
                copy_asset(AssetKind::Sample, name, source, &out_samples, &mut summary, progress);
            }
        }
        Some(ref sample_dir) => {
            log::debug!(
                "Sample directory {} not found, skipping {} sample sets",
                sample_dir.display(),
                selection.samples.len()
            );
        }
        None => {}
    }

    progress(SortProgress::CopyFinished {
        copied: summary.copied,
        missing: summary.missing,
        failed: summary.failed.len(),
    });
    summary
}

/// Locate `<dir>/<name>.<ext>` for the first archive extension that exists.
pub fn find_archive(dir: &Path, name: &str) -> Option<PathBuf> {
    ARCHIVE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}

fn copy_asset(
    kind: AssetKind,
    name: &str,
    source: Option<PathBuf>,
    dest_dir: &Path,
    summary: &mut CopySummary,
    progress: &dyn Fn(SortProgress),
) {
    let Some(source) = source else {
        log::debug!("{kind} not found in source directory: {name}");
        summary.missing += 1;
        return;
    };

    match copy_into(&source, dest_dir) {
        Ok(()) => summary.copied += 1,
        Err(e) => {
            log::warn!("{kind} copy failed for {name}: {e}");
            summary.failed.push(format!("{}: {}", source.display(), e));
            progress(SortProgress::CopyFailed {
                kind,
                name: name.to_string(),
                message: e.to_string(),
            });
        }
    }
}

fn copy_into(source: &Path, dest_dir: &Path) -> std::io::Result<()> {
    let file_name = source
        .file_name()
        .ok_or_else(|| std::io::Error::other("source has no file name"))?;
    std::fs::create_dir_all(dest_dir)?;
    std::fs::copy(source, dest_dir.join(file_name))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/copier_tests.rs"]
mod tests;
