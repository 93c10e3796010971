use drdb_core::{CanonicalDoctorRecord, COLUMN_ORDER};

/// Why a unit was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitErrorKind {
    /// The line is not a JSON object of the expected shape.
    Malformed,
    /// Any other per-unit failure, e.g. a line that is not valid UTF-8.
    Unexpected,
}

impl std::fmt::Display for UnitErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitErrorKind::Malformed => write!(f, "malformed unit"),
            UnitErrorKind::Unexpected => write!(f, "unexpected unit error"),
        }
    }
}

/// A skipped input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDiagnostic {
    /// 1-based line number of the unit in the input.
    pub position: usize,
    pub kind: UnitErrorKind,
    pub message: String,
}

/// Accumulated records in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<CanonicalDoctorRecord>,
}

impl Dataset {
    /// Column names in output order.
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMN_ORDER
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub dataset: Dataset,
    pub diagnostics: Vec<UnitDiagnostic>,
}
