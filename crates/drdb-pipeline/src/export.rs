//! CSV emission of a finished [`Dataset`].

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::PipelineError;
use crate::types::Dataset;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Prefix the file with a UTF-8 byte-order mark.
    pub bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { bom: true }
    }
}

/// Writes `dataset` to `path` as CSV, every field quoted.
///
/// Data is written to a sibling `.tmp` file first and renamed into place, so
/// `path` either holds a complete file or is left untouched.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyResult`] for an empty dataset,
/// [`PipelineError::Output`] on I/O failure and [`PipelineError::Csv`] on
/// serialization failure.
pub fn write_csv(dataset: &Dataset, path: &Path, options: &CsvOptions) -> Result<(), PipelineError> {
    if dataset.is_empty() {
        return Err(PipelineError::EmptyResult { skipped: 0 });
    }

    let tmp_path = temp_path_for(path);
    let output_err = |source: std::io::Error| PipelineError::Output {
        path: path.display().to_string(),
        source,
    };

    let result = File::create(&tmp_path)
        .map_err(output_err)
        .and_then(|file| write_output(dataset, BufWriter::new(file), path, options))
        .and_then(|()| fs::rename(&tmp_path, path).map_err(output_err));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    } else {
        tracing::info!(path = %path.display(), rows = dataset.len(), "wrote csv");
    }
    result
}

/// Writes `dataset` as CSV into `writer`, reporting I/O failures against
/// `path`.
fn write_output<W: Write>(
    dataset: &Dataset,
    mut writer: W,
    path: &Path,
    options: &CsvOptions,
) -> Result<(), PipelineError> {
    if options.bom {
        writer
            .write_all(UTF8_BOM)
            .map_err(|source| PipelineError::Output {
                path: path.display().to_string(),
                source,
            })?;
    }

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(dataset.columns())?;
    for record in &dataset.records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush().map_err(|source| PipelineError::Output {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
