//! End-of-run statistics.

use std::collections::HashMap;

use drdb_core::CanonicalDoctorRecord;

use crate::types::PipelineOutput;

/// Figures printed after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub columns: usize,
    pub skipped: usize,
    pub top_cities: Vec<(String, usize)>,
    pub top_specializations: Vec<(String, usize)>,
}

/// Builds the run summary, keeping `top_n` rows per frequency table.
#[must_use]
pub fn summarize(output: &PipelineOutput, top_n: usize) -> RunSummary {
    let records = &output.dataset.records;
    RunSummary {
        records: records.len(),
        columns: output.dataset.columns().len(),
        skipped: output.diagnostics.len(),
        top_cities: value_counts(records, "city1", top_n),
        top_specializations: value_counts(records, "specialization", top_n),
    }
}

/// Counts distinct values of `column`, most frequent first.
///
/// Ties keep first-appearance order. Unknown columns yield an empty list.
#[must_use]
pub fn value_counts(
    records: &[CanonicalDoctorRecord],
    column: &str,
    top_n: usize,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in records.iter().filter_map(|r| r.column(column)) {
        if let Some(&i) = index.get(&value) {
            counts[i].1 += 1;
        } else {
            index.insert(value.clone(), counts.len());
            counts.push((value, 1));
        }
    }

    // Stable sort preserves first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}
