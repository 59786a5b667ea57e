pub mod engine;
pub mod evaluator;
pub mod formulas;
pub mod report;

pub use crate::domain::model::{AxisPair, Evaluation, Formula};
pub use crate::domain::ports::{AxisSource, ConfigProvider, ReportRenderer};
pub use crate::utils::error::Result;
