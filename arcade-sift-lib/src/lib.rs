pub mod classify;
pub mod config;
pub mod copier;
pub mod error;
pub mod filters;
pub mod locale;
pub mod pipeline;
pub mod preset;
pub mod progress;
pub mod report;
pub mod runner;
pub mod settings;
pub mod tables;

pub use arcade_sift_catalog::{
    Catalog, CatalogError, LocaleScan, MachineRecord, parse_catalog, parse_catalog_file,
    scan_catalog_locales, scan_locales,
};
pub use classify::{Lineage, classify_lineage, is_arcade_machine};
pub use config::{FilterConfig, FilterOptions, Orientation};
pub use copier::{CopyPaths, CopySummary, copy_assets};
pub use error::{ConfigIssue, ConfigValidationError, PresetError, SortError};
pub use filters::AttributeFilter;
pub use locale::{language_rank, region_rank};
pub use pipeline::{KeptMachine, RankKey, Selection, SkipReason, SkipTally, select, select_with_progress};
pub use preset::{Preset, load_preset, save_preset};
pub use progress::{AssetKind, SortProgress};
pub use runner::{RunPaths, RunSummary, run_sort};
