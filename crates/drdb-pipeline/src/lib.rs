//! JSON Lines → CSV conversion pipeline for crawled doctor profiles.
//!
//! Reads one raw unit per line, routes each through extraction and record
//! assembly, skips (and reports) units that cannot be processed, and writes
//! the accumulated records as a fully quoted CSV in canonical column order.

pub mod error;
pub mod export;
pub mod pipeline;
pub mod summary;
pub mod types;
pub mod unit;

pub use error::PipelineError;
pub use export::{write_csv, CsvOptions};
pub use pipeline::{convert_file, run_file, run_reader, PipelineState};
pub use summary::{summarize, value_counts, RunSummary};
pub use types::{Dataset, PipelineOutput, UnitDiagnostic, UnitErrorKind};
pub use unit::InputUnit;
