use thiserror::Error;

/// Fatal pipeline failures. Per-unit problems are not errors; they are
/// reported as [`crate::UnitDiagnostic`]s and the unit is skipped.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input '{path}' could not be opened: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input became unreadable at line {position}: {source}")]
    Read {
        position: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("no records were processed ({skipped} units skipped)")]
    EmptyResult { skipped: usize },

    #[error("failed to write output '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
