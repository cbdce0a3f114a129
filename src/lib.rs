pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::HubConfig};
pub use crate::core::estimate::{estimate, hash_string, EstimateFactors};
pub use crate::core::{boards::Board, engine::HubEngine, engine::RunOutcome};
pub use crate::domain::model::{SearchInput, SummaryStats};
pub use crate::utils::error::{HubError, Result};
