pub mod app_config;
pub mod config;
pub mod pages;
pub mod records;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_overrides};
pub use pages::{PriceObservations, RawProfilePage};
pub use records::{CanonicalDoctorRecord, COLUMN_ORDER};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
