use crate::domain::model::{AxisPair, Evaluation, InputMode, OutputFormat};
use crate::utils::error::Result;
use std::io::Write;

/// Where the two axis lengths come from.
pub trait AxisSource {
    fn read_axes(&mut self) -> Result<AxisPair>;
}

pub trait ReportRenderer {
    fn render(&self, axes: &AxisPair, results: &[Evaluation], out: &mut dyn Write) -> Result<()>;
}

/// One layer of run settings. `None` means "not set here".
pub trait ConfigProvider {
    fn major(&self) -> Option<f32>;
    fn minor(&self) -> Option<f32>;
    fn input_mode(&self) -> Option<InputMode>;
    fn output_format(&self) -> Option<OutputFormat>;
    fn formula_selection(&self) -> Option<&[String]>;
}
