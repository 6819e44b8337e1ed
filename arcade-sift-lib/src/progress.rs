use std::path::PathBuf;

/// The kind of asset a copy event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// ROM or BIOS archive
    Rom,
    /// Disk image (CHD)
    Disk,
    /// Audio sample archive
    Sample,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rom => "ROM",
            Self::Disk => "Disk",
            Self::Sample => "Sample",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress update emitted during a sort run.
///
/// Events are emitted in order through a `&dyn Fn(SortProgress)` sink. Front
/// ends typically forward them over an MPSC channel and drain it on their UI
/// thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortProgress {
    /// The catalog was parsed
    CatalogLoaded { entries: usize },

    /// Classification and filtering finished
    Matched { matched: usize, total: usize },

    /// Ranking and deduplication finished
    Deduplicated { unique: usize },

    /// Asset sets computed, copy about to start
    AssetsPlanned {
        total: usize,
        destination: PathBuf,
    },

    /// One asset could not be copied; the batch continues
    CopyFailed {
        kind: AssetKind,
        name: String,
        message: String,
    },

    /// The copy step finished
    CopyFinished {
        copied: usize,
        missing: usize,
        failed: usize,
    },

    /// The diagnostic report was written
    ReportWritten { path: PathBuf },
}

impl SortProgress {
    /// One-line, human-readable description of the event.
    pub fn message(&self) -> String {
        match self {
            Self::CatalogLoaded { entries } => {
                format!("Catalog loaded: {entries} entries detected")
            }
            Self::Matched { matched, total } => {
                format!("Matched {matched} / {total} after filtering")
            }
            Self::Deduplicated { unique } => {
                format!("After dedupe: {unique} unique titles ready to copy")
            }
            Self::AssetsPlanned { total, destination } => {
                format!("Found {total} assets to copy to {}", destination.display())
            }
            Self::CopyFailed {
                kind,
                name,
                message,
            } => format!("{kind} copy failed for {name}: {message}"),
            Self::CopyFinished {
                copied,
                missing,
                failed,
            } => format!(
                "Copy complete: {copied} copied, {missing} not found, {failed} failed"
            ),
            Self::ReportWritten { path } => {
                format!("Decision log written to {}", path.display())
            }
        }
    }
}
