pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, RunSettings};
pub use crate::core::{engine::ReportEngine, evaluator::Evaluator, formulas::FORMULAS};
pub use domain::model::{AxisPair, Evaluation, Formula, InputMode, OutputFormat};
pub use utils::error::{EllipseError, Result};
