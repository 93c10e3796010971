//! Handler for the `run` command.

use std::path::PathBuf;

use drdb_core::AppConfig;
use drdb_pipeline::{convert_file, summarize, CsvOptions, PipelineError, RunSummary};

/// Effective settings for one conversion, after positional arguments and
/// flags have been layered over the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) csv: CsvOptions,
    pub(crate) top_n: usize,
}

impl RunSettings {
    /// Takes the paths from the positional arguments when given, everything
    /// else from `config`.
    pub(crate) fn resolve(
        config: &AppConfig,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            input: input.unwrap_or_else(|| config.input_path.clone()),
            output: output.unwrap_or_else(|| config.output_path.clone()),
            csv: CsvOptions {
                bom: config.csv_bom,
            },
            top_n: config.summary_top_n,
        }
    }
}

/// Config values set by command-line flags; these replace the matching
/// environment variables when the config is loaded.
pub(crate) fn config_overrides(no_bom: bool, top: Option<usize>) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if no_bom {
        overrides.push(("DRDB_CSV_BOM", "false".to_string()));
    }
    if let Some(top) = top {
        overrides.push(("DRDB_SUMMARY_TOP_N", top.to_string()));
    }
    overrides
}

/// Converts the input file and prints the run summary.
///
/// # Errors
///
/// Returns an error if the input cannot be read, no record could be produced,
/// or the output cannot be written. No output file exists in any of these
/// cases.
pub(crate) fn run_convert(settings: &RunSettings) -> anyhow::Result<()> {
    let output = match convert_file(&settings.input, &settings.output, &settings.csv) {
        Ok(output) => output,
        Err(PipelineError::EmptyResult { skipped }) => {
            anyhow::bail!(
                "no records were processed from '{}' ({skipped} units skipped); nothing written",
                settings.input.display()
            );
        }
        Err(e) => return Err(e.into()),
    };

    for diagnostic in &output.diagnostics {
        tracing::debug!(
            position = diagnostic.position,
            kind = %diagnostic.kind,
            "skipped unit"
        );
    }

    let summary = summarize(&output, settings.top_n);
    print!("{}", render_summary(&summary, &settings.output));
    Ok(())
}

fn render_summary(summary: &RunSummary, output: &std::path::Path) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "wrote {}", output.display());
    let _ = writeln!(
        out,
        "{} records, {} columns, {} units skipped",
        summary.records, summary.columns, summary.skipped
    );
    write_table(&mut out, "city1", &summary.top_cities);
    write_table(&mut out, "specialization", &summary.top_specializations);
    out
}

fn write_table(out: &mut String, column: &str, rows: &[(String, usize)]) {
    use std::fmt::Write as _;

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<32}COUNT", column.to_uppercase());
    if rows.is_empty() {
        let _ = writeln!(out, "(no values)");
        return;
    }
    for (value, count) in rows {
        let label = if value.is_empty() { "(empty)" } else { value };
        let _ = writeln!(out, "{label:<32}{count}");
    }
}
