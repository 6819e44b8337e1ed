//! Plain-text decision log for a selection pass.

use std::fmt::Write as _;
use std::path::Path;

use crate::pipeline::Selection;

/// File name of the decision log inside the output directory.
pub const REPORT_FILE_NAME: &str = "filter_log.txt";

impl Selection {
    /// Render the decision log: totals, skip tallies, and the kept list best-first.
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Total parsed: {}", self.total_parsed);
        let _ = writeln!(out, "Matched unique: {}", self.kept.len());
        for (label, count) in self.tally.by_label() {
            let _ = writeln!(out, "Skipped {label}: {count}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Kept list (best-first):");
        for (i, kept) in self.kept.iter().enumerate() {
            let _ = write!(
                out,
                "{:4}. {} - {} [{}]",
                i + 1,
                kept.name,
                kept.description,
                kept.lineage
            );
            let credits: Vec<&str> = [kept.year.as_deref(), kept.manufacturer.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if !credits.is_empty() {
                let _ = write!(out, " ({})", credits.join(", "));
            }
            let _ = writeln!(out);
        }
        out
    }
}

/// Write the decision log to `path`, replacing any previous log.
pub fn write_report(selection: &Selection, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, selection.report())
}
