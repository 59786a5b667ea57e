use crate::core::evaluator::Evaluator;
use crate::domain::model::{AxisPair, InputMode, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Settings for one run, merged from config layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSettings {
    /// Axes known up front. `None` means read them from stdin.
    pub axes: Option<AxisPair>,
    pub input_mode: InputMode,
    pub output_format: OutputFormat,
    pub formulas: Option<Vec<String>>,
}

impl RunSettings {
    /// Merges `layers` in priority order: the first layer that sets a value wins.
    pub fn resolve(layers: &[&dyn ConfigProvider]) -> Self {
        let axes = layers
            .iter()
            .find_map(|layer| match (layer.major(), layer.minor()) {
                (Some(a), Some(b)) => Some(AxisPair::new(a, b)),
                _ => None,
            });

        Self {
            axes,
            input_mode: layers
                .iter()
                .find_map(|layer| layer.input_mode())
                .unwrap_or_default(),
            output_format: layers
                .iter()
                .find_map(|layer| layer.output_format())
                .unwrap_or_default(),
            formulas: layers
                .iter()
                .find_map(|layer| layer.formula_selection())
                .map(|names| names.to_vec()),
        }
    }

    pub fn evaluator(&self) -> Result<Evaluator> {
        match &self.formulas {
            Some(names) => Evaluator::with_selection(names.as_slice()),
            None => Ok(Evaluator::new()),
        }
    }
}
