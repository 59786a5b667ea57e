use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Major and minor semi-axis lengths of an ellipse.
///
/// Single precision like the rest of the report. Values are taken as given:
/// zero, negative or NaN axes are not rejected and simply flow through the
/// formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPair {
    pub a: f32,
    pub b: f32,
}

impl AxisPair {
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// A named closed-form circumference approximation.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// Short lookup key used by configuration files.
    pub key: &'static str,
    /// Display name, at most 50 characters.
    pub name: &'static str,
    pub evaluate: fn(f32, f32) -> f32,
}

impl Formula {
    pub fn apply(&self, axes: &AxisPair) -> f32 {
        (self.evaluate)(axes.a, axes.b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub name: String,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["table", "csv", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// How the axes are read from standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Both values in a single read, whitespace separated.
    #[default]
    Combined,
    /// One prompt and one line per axis.
    Prompted,
}

impl InputMode {
    pub const NAMES: [&'static str; 2] = ["combined", "prompted"];
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "prompted" => Ok(Self::Prompted),
            other => Err(format!("unknown input mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_input_mode_parse() {
        assert_eq!("Prompted".parse::<InputMode>().unwrap(), InputMode::Prompted);
        assert!("interactive".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_axis_pair_swapped() {
        let axes = AxisPair::new(5.0, 3.0).swapped();
        assert_eq!(axes, AxisPair::new(3.0, 5.0));
    }
}
