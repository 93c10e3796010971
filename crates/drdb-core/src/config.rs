use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_INPUT_PATH: &str = "output.jl";
pub const DEFAULT_OUTPUT_PATH: &str = "doctoralia_data.csv";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load application configuration with explicit values layered over the
/// environment.
///
/// Each `(var, value)` pair is used instead of the environment variable of the
/// same name, so an invalid env value is never read when it is overridden.
/// Loads `.env` like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_with_overrides(
    overrides: &[(&str, String)],
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(layered(overrides, |key| std::env::var(key)))
}

/// Lookup that consults `overrides` before falling back to `fallback`.
fn layered<'a, F>(
    overrides: &'a [(&'a str, String)],
    fallback: F,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a
where
    F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
{
    move |key| {
        overrides
            .iter()
            .find(|(var, _)| *var == key)
            .map_or_else(|| fallback(key), |(_, value)| Ok(value.clone()))
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent variables fall back to the defaults
/// documented on [`AppConfig`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let input_path = PathBuf::from(or_default("DRDB_INPUT_PATH", DEFAULT_INPUT_PATH));
    let output_path = PathBuf::from(or_default("DRDB_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let log_level = or_default("DRDB_LOG_LEVEL", "info");
    let csv_bom = parse_flag("DRDB_CSV_BOM", &or_default("DRDB_CSV_BOM", "true"))?;
    let summary_top_n = parse_usize("DRDB_SUMMARY_TOP_N", "5")?;

    Ok(AppConfig {
        input_path,
        output_path,
        log_level,
        csv_bom,
        summary_top_n,
    })
}

/// Parse a boolean-ish env var value.
fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
