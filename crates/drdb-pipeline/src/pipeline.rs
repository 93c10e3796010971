//! Streaming driver: JSON Lines in, canonical dataset out.
//!
//! The driver is strictly sequential so diagnostics line up with input line
//! numbers and output rows keep input order. A unit that fails to parse is
//! skipped with a diagnostic; only an unreadable source aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use drdb_scraper::assemble;

use crate::error::PipelineError;
use crate::export::{write_csv, CsvOptions};
use crate::types::{Dataset, PipelineOutput, UnitDiagnostic, UnitErrorKind};
use crate::unit::InputUnit;

/// Lifecycle of a pipeline run.
///
/// `Reading → (Parsing → Assembling → Accumulating)* → Finalizing → Done`,
/// or `Reading → Aborted` when the source cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Reading,
    Parsing,
    Assembling,
    Accumulating,
    Finalizing,
    Done,
    Aborted,
}

struct Driver {
    state: PipelineState,
    dataset: Dataset,
    diagnostics: Vec<UnitDiagnostic>,
}

impl Driver {
    fn new() -> Self {
        Self {
            state: PipelineState::Reading,
            dataset: Dataset::default(),
            diagnostics: Vec::new(),
        }
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::trace!(from = ?self.state, to = ?next, "pipeline state");
        self.state = next;
    }

    fn process_line(&mut self, position: usize, raw: &[u8]) {
        self.transition(PipelineState::Parsing);

        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(e) => {
                self.skip(position, UnitErrorKind::Unexpected, e.to_string());
                return;
            }
        };

        if line.is_empty() {
            tracing::debug!(position, "skipping blank line");
            self.transition(PipelineState::Reading);
            return;
        }

        let unit = match serde_json::from_str::<InputUnit>(line) {
            Ok(unit) => unit,
            Err(e) => {
                self.skip(position, UnitErrorKind::Malformed, e.to_string());
                return;
            }
        };

        self.transition(PipelineState::Assembling);
        let (fields, prices) = unit.into_parts();
        let record = assemble(&fields, &prices);

        self.transition(PipelineState::Accumulating);
        self.dataset.records.push(record);
        self.transition(PipelineState::Reading);
    }

    fn skip(&mut self, position: usize, kind: UnitErrorKind, message: String) {
        tracing::warn!(position, kind = %kind, error = %message, "skipping unit");
        self.diagnostics.push(UnitDiagnostic {
            position,
            kind,
            message,
        });
        self.transition(PipelineState::Reading);
    }

    fn finish(mut self) -> Result<PipelineOutput, PipelineError> {
        self.transition(PipelineState::Finalizing);
        if self.dataset.is_empty() {
            return Err(PipelineError::EmptyResult {
                skipped: self.diagnostics.len(),
            });
        }
        self.transition(PipelineState::Done);
        tracing::info!(
            records = self.dataset.len(),
            skipped = self.diagnostics.len(),
            "pipeline finished"
        );
        Ok(PipelineOutput {
            dataset: self.dataset,
            diagnostics: self.diagnostics,
        })
    }
}

/// Runs the pipeline over any line-oriented reader.
///
/// # Errors
///
/// Returns [`PipelineError::Read`] if the reader fails mid-stream and
/// [`PipelineError::EmptyResult`] if no unit produced a record.
pub fn run_reader<R: BufRead>(mut reader: R) -> Result<PipelineOutput, PipelineError> {
    let mut driver = Driver::new();
    let mut buf = Vec::new();
    let mut position = 0usize;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
            driver.transition(PipelineState::Aborted);
            PipelineError::Read {
                position: position + 1,
                source,
            }
        })?;
        if read == 0 {
            break;
        }
        position += 1;
        driver.process_line(position, &buf);
    }

    driver.finish()
}

/// Opens `path` and runs the pipeline over it.
///
/// # Errors
///
/// Returns [`PipelineError::SourceUnavailable`] if the file cannot be opened,
/// plus everything [`run_reader`] can return.
pub fn run_file(path: &Path) -> Result<PipelineOutput, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "reading input");
    run_reader(BufReader::new(file))
}

/// Converts a JSON Lines file into a CSV file.
///
/// The output is only created when at least one record was produced.
///
/// # Errors
///
/// Returns any [`PipelineError`] from reading or writing; on error no output
/// file is left behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &CsvOptions,
) -> Result<PipelineOutput, PipelineError> {
    let result = run_file(input)?;
    write_csv(&result.dataset, output, options)?;
    Ok(result)
}
