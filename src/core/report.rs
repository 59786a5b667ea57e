//! Report renderers: the bordered text table plus CSV and JSON variants.

use crate::domain::model::{AxisPair, Evaluation, OutputFormat};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Total width of a separator line and of every data row.
pub const TABLE_WIDTH: usize = 55;
/// Width the formula name is right-aligned into.
pub const NAME_WIDTH: usize = 36;
/// Width of the value column, six decimals.
pub const VALUE_WIDTH: usize = 15;

/// Right-aligned fixed-point text in the style of printf's `%W.Pf`.
/// Non-finite values are spelled `nan`, `-nan`, `inf` and `-inf`.
pub fn fixed_point(value: f32, width: usize, precision: usize) -> String {
    if value.is_finite() {
        return format!("{:>width$.precision$}", value);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let body = if value.is_nan() { "nan" } else { "inf" };
    format!("{:>width$}", format!("{}{}", sign, body))
}

/// First line of the table, both axes to two decimals.
pub fn header(axes: &AxisPair) -> String {
    format!(
        "Ellipse Circumference for Major Axis: {} and Minor Axis: {}",
        fixed_point(axes.a, 6, 2),
        fixed_point(axes.b, 6, 2)
    )
}

/// Border line drawn under the header and under every row.
pub fn separator() -> String {
    format!("+{}+", "-".repeat(TABLE_WIDTH - 2))
}

/// One `|name |value|` row, exactly [`TABLE_WIDTH`] wide for built-in names.
pub fn render_row(evaluation: &Evaluation) -> String {
    format!(
        "|{:>name_width$} |{}|",
        evaluation.name,
        fixed_point(evaluation.value, VALUE_WIDTH, 6),
        name_width = NAME_WIDTH
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TableRenderer;

impl ReportRenderer for TableRenderer {
    fn render(&self, axes: &AxisPair, results: &[Evaluation], out: &mut dyn Write) -> Result<()> {
        let separator = separator();
        writeln!(out, "{}", header(axes))?;
        writeln!(out, "{}", separator)?;
        for evaluation in results {
            writeln!(out, "{}", render_row(evaluation))?;
            writeln!(out, "{}", separator)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Renders the table into a `String` instead of a writer.
pub fn render_table_string(axes: &AxisPair, results: &[Evaluation]) -> Result<String> {
    let mut buffer = Vec::new();
    TableRenderer.render(axes, results, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    formula: &'a str,
    a: f32,
    b: f32,
    circumference: f32,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn render(&self, axes: &AxisPair, results: &[Evaluation], out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for evaluation in results {
            writer.serialize(CsvRecord {
                formula: &evaluation.name,
                a: axes.a,
                b: axes.b,
                circumference: evaluation.value,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    a: f32,
    b: f32,
    results: &'a [Evaluation],
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, axes: &AxisPair, results: &[Evaluation], out: &mut dyn Write) -> Result<()> {
        let report = JsonReport {
            a: axes.a,
            b: axes.b,
            results,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Picks the renderer for an output format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Table => Box::new(TableRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
