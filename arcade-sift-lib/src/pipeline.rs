//! Selection pipeline: classify, filter, rank, deduplicate, resolve assets.
//!
//! Per-record evaluation depends only on the record and the configuration, so
//! large catalogs are split into contiguous partitions evaluated on scoped
//! threads. Sorting, deduplication and the asset union need global order and
//! run on the calling thread.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use arcade_sift_catalog::{Catalog, MachineRecord};

use crate::classify::{Lineage, classify_lineage, is_arcade_machine};
use crate::config::FilterConfig;
use crate::filters::{AttributeFilter, first_failure};
use crate::locale::{language_rank, region_rank};
use crate::progress::SortProgress;

/// File extension of disk images inside a machine's ROM folder.
pub const DISK_EXTENSION: &str = "chd";

/// Below this many records per worker, partitioning costs more than it saves.
const MIN_RECORDS_PER_WORKER: usize = 4096;

/// Why a machine was left out of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    CloneType,
    NotArcade,
    NotWorking,
    Mature,
    Orientation,
    Players,
    Buttons,
    Controls,
    Directions,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CloneType => "clone_type",
            Self::NotArcade => "not_arcade",
            Self::NotWorking => "not_working",
            Self::Mature => "mature",
            Self::Orientation => "orientation",
            Self::Players => "players",
            Self::Buttons => "buttons",
            Self::Controls => "controls",
            Self::Directions => "directions",
        }
    }
}

impl From<AttributeFilter> for SkipReason {
    fn from(filter: AttributeFilter) -> Self {
        match filter {
            AttributeFilter::Working => Self::NotWorking,
            AttributeFilter::Mature => Self::Mature,
            AttributeFilter::Orientation => Self::Orientation,
            AttributeFilter::Players => Self::Players,
            AttributeFilter::Buttons => Self::Buttons,
            AttributeFilter::Controls => Self::Controls,
            AttributeFilter::Directions => Self::Directions,
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of rejected machines per reason, for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipTally {
    counts: BTreeMap<SkipReason, usize>,
}

impl SkipTally {
    pub fn record(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn merge(&mut self, other: &SkipTally) {
        for (reason, count) in &other.counts {
            *self.counts.entry(*reason).or_insert(0) += count;
        }
    }

    pub fn get(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts, sorted by label.
    pub fn by_label(&self) -> Vec<(&'static str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(reason, count)| (reason.label(), *count))
            .collect();
        entries.sort_by_key(|(label, _)| *label);
        entries
    }
}

/// Sort key of a surviving machine; the derived `Ord` compares fields in order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    pub lineage: u8,
    pub region: usize,
    pub language: usize,
    pub name: String,
}

/// Assets one machine needs on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// The machine's own set plus its `romof` parent/BIOS set
    pub roms: Vec<String>,
    /// `"<machine>/<disk>.chd"` relative paths
    pub disks: Vec<String>,
    /// Sample sets, including `sampleof`
    pub samples: Vec<String>,
}

impl Dependencies {
    pub fn of(machine: &MachineRecord) -> Self {
        let mut roms = vec![machine.name.clone()];
        if let Some(ref rom_of) = machine.rom_of {
            roms.push(rom_of.clone());
        }

        let disks = machine
            .disks
            .iter()
            .map(|disk| format!("{}/{}.{}", machine.name, disk, DISK_EXTENSION))
            .collect();

        let mut samples: Vec<String> = Vec::new();
        for sample in machine.samples.iter().chain(machine.sample_of.iter()) {
            if !samples.contains(sample) {
                samples.push(sample.clone());
            }
        }

        Self {
            roms,
            disks,
            samples,
        }
    }
}

/// A machine that passed every gate, with its rank and dependencies.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub machine: &'a MachineRecord,
    pub lineage: Lineage,
    pub key: RankKey,
    pub dependencies: Dependencies,
}

/// Run one machine through the lineage gate, the arcade classifier and the
/// attribute filters, in that order.
pub fn evaluate<'a>(
    machine: &'a MachineRecord,
    config: &FilterConfig,
) -> Result<Candidate<'a>, SkipReason> {
    let lineage = classify_lineage(machine);
    if !lineage.is_included(config) {
        return Err(SkipReason::CloneType);
    }
    if !is_arcade_machine(machine) {
        return Err(SkipReason::NotArcade);
    }
    if let Some(filter) = first_failure(config, machine) {
        return Err(filter.into());
    }

    let key = RankKey {
        lineage: lineage.rank(),
        region: region_rank(&machine.name, &machine.description, config.region_order()),
        language: language_rank(&machine.name, &machine.description, config.language_order()),
        name: machine.name.clone(),
    };

    Ok(Candidate {
        machine,
        lineage,
        key,
        dependencies: Dependencies::of(machine),
    })
}

/// A kept machine, as listed in the decision log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptMachine {
    pub name: String,
    pub description: String,
    pub year: Option<String>,
    pub manufacturer: Option<String>,
    pub lineage: Lineage,
    pub region_rank: usize,
    pub language_rank: usize,
}

/// Outcome of a selection pass.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Number of catalog entries examined
    pub total_parsed: usize,
    /// Kept machines, best first
    pub kept: Vec<KeptMachine>,
    /// ROM and BIOS set names
    pub roms: BTreeSet<String>,
    /// Disk image paths relative to the ROM directory
    pub disks: BTreeSet<String>,
    /// Sample set names
    pub samples: BTreeSet<String>,
    pub tally: SkipTally,
}

impl Selection {
    pub fn asset_count(&self) -> usize {
        self.roms.len() + self.disks.len() + self.samples.len()
    }

    pub fn kept_names(&self) -> Vec<&str> {
        self.kept.iter().map(|k| k.name.as_str()).collect()
    }
}

/// Select machines from the catalog according to the configuration.
pub fn select(catalog: &Catalog, config: &FilterConfig) -> Selection {
    select_with_progress(catalog, config, &|_| {})
}

/// Like [`select`], reporting milestones through `progress`.
pub fn select_with_progress(
    catalog: &Catalog,
    config: &FilterConfig,
    progress: &dyn Fn(SortProgress),
) -> Selection {
    let workers = worker_count(catalog.len());
    select_partitioned(catalog, config, workers, progress)
}

fn select_partitioned(
    catalog: &Catalog,
    config: &FilterConfig,
    workers: usize,
    progress: &dyn Fn(SortProgress),
) -> Selection {
    let (mut candidates, tally) = evaluate_all(&catalog.machines, config, workers);
    progress(SortProgress::Matched {
        matched: candidates.len(),
        total: catalog.len(),
    });

    // Stable sort: equal keys keep catalog order, whatever the partitioning.
    candidates.sort_by(|a, b| a.key.cmp(&b.key));

    let mut selection = Selection {
        total_parsed: catalog.len(),
        tally,
        ..Default::default()
    };
    let mut seen: HashSet<&str> = HashSet::new();

    for candidate in candidates {
        if !seen.insert(candidate.machine.name.as_str()) {
            continue;
        }
        let Candidate {
            machine,
            lineage,
            key,
            dependencies,
        } = candidate;

        selection.roms.extend(dependencies.roms);
        selection.disks.extend(dependencies.disks);
        selection.samples.extend(dependencies.samples);
        selection.kept.push(KeptMachine {
            name: machine.name.clone(),
            description: machine.description.clone(),
            year: machine.year.clone(),
            manufacturer: machine.manufacturer.clone(),
            lineage,
            region_rank: key.region,
            language_rank: key.language,
        });
    }

    progress(SortProgress::Deduplicated {
        unique: selection.kept.len(),
    });
    selection
}

/// Evaluate every machine, splitting the slice across `workers` threads.
fn evaluate_all<'a>(
    machines: &'a [MachineRecord],
    config: &FilterConfig,
    workers: usize,
) -> (Vec<Candidate<'a>>, SkipTally) {
    if workers <= 1 || machines.len() < 2 {
        return evaluate_chunk(machines, config);
    }

    let chunk_size = machines.len().div_ceil(workers);
    log::debug!(
        "Evaluating {} machines on {} workers ({} per partition)",
        machines.len(),
        workers,
        chunk_size
    );

    std::thread::scope(|s| {
        let handles: Vec<_> = machines
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || evaluate_chunk(chunk, config)))
            .collect();

        let mut candidates = Vec::new();
        let mut tally = SkipTally::default();
        for handle in handles {
            match handle.join() {
                Ok((chunk_candidates, chunk_tally)) => {
                    candidates.extend(chunk_candidates);
                    tally.merge(&chunk_tally);
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        (candidates, tally)
    })
}

fn evaluate_chunk<'a>(
    machines: &'a [MachineRecord],
    config: &FilterConfig,
) -> (Vec<Candidate<'a>>, SkipTally) {
    let mut candidates = Vec::new();
    let mut tally = SkipTally::default();
    for machine in machines {
        match evaluate(machine, config) {
            Ok(candidate) => candidates.push(candidate),
            Err(reason) => tally.record(reason),
        }
    }
    (candidates, tally)
}

fn worker_count(records: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (records / MIN_RECORDS_PER_WORKER).clamp(1, available)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
