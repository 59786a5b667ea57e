use crate::core::evaluator::Evaluator;
use crate::core::report::renderer_for;
use crate::domain::model::{AxisPair, Evaluation, OutputFormat};
use crate::domain::ports::{AxisSource, ReportRenderer};
use crate::utils::error::Result;
use std::io::Write;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub axes: AxisPair,
    pub results: Vec<Evaluation>,
}

/// One linear pass: read axes, evaluate formulas, render the report.
pub struct ReportEngine<S: AxisSource> {
    source: S,
    evaluator: Evaluator,
    renderer: Box<dyn ReportRenderer>,
}

impl<S: AxisSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, Evaluator::new(), OutputFormat::Table)
    }

    pub fn with_options(source: S, evaluator: Evaluator, format: OutputFormat) -> Self {
        Self {
            source,
            evaluator,
            renderer: renderer_for(format),
        }
    }

    pub fn run(&mut self, out: &mut dyn Write) -> Result<ReportOutcome> {
        let axes = self.source.read_axes()?;
        tracing::info!("📐 Axes: a = {}, b = {}", axes.a, axes.b);

        let results = self.evaluator.evaluate(&axes);
        tracing::info!("Evaluated {} formulas", results.len());

        self.renderer.render(&axes, &results, out)?;

        Ok(ReportOutcome { axes, results })
    }
}
