use std::path::PathBuf;

/// Runtime settings for a conversion run.
///
/// Positional CLI arguments override `input_path` and `output_path`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    /// Prefix the CSV with a UTF-8 byte-order mark so spreadsheet tools
    /// detect the encoding.
    pub csv_bom: bool,
    /// Rows shown per value-frequency table in the run summary.
    pub summary_top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(crate::config::DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(crate::config::DEFAULT_OUTPUT_PATH),
            log_level: "info".to_string(),
            csv_bom: true,
            summary_top_n: 5,
        }
    }
}
