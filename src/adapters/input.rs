use crate::domain::model::AxisPair;
use crate::domain::ports::AxisSource;
use crate::utils::error::Result;
use std::io::{BufRead, Read, Write};

pub const MAJOR_PROMPT: &str = "Enter the major axis length: ";
pub const MINOR_PROMPT: &str = "Enter the minor axis length: ";

/// Parses one axis token. Missing or malformed input is not an error: the
/// axis becomes NaN and the formulas report NaN for it.
pub fn parse_axis(label: &str, token: Option<&str>) -> f32 {
    match token.map(str::trim) {
        Some(text) => text.parse::<f32>().unwrap_or_else(|_| {
            tracing::warn!("⚠️ Could not parse {} axis from '{}', using NaN", label, text);
            f32::NAN
        }),
        None => {
            tracing::warn!("⚠️ No value for {} axis, using NaN", label);
            f32::NAN
        }
    }
}

/// Reads both axes from one stream, whitespace separated.
pub struct CombinedReader<R: Read> {
    reader: R,
}

impl<R: Read> CombinedReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> AxisSource for CombinedReader<R> {
    fn read_axes(&mut self) -> Result<AxisPair> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        tracing::debug!("Read {} bytes from input", content.len());

        let mut tokens = content.split_whitespace();
        let a = parse_axis("major", tokens.next());
        let b = parse_axis("minor", tokens.next());
        if tokens.next().is_some() {
            tracing::debug!("Ignoring extra input after the minor axis");
        }

        Ok(AxisPair::new(a, b))
    }
}

/// Prompts for each axis in turn and reads one line per answer.
pub struct PromptedReader<R: BufRead, W: Write> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PromptedReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }

    fn ask(&mut self, prompt: &str, label: &str) -> Result<f32> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        let token = if read == 0 { None } else { Some(line.as_str()) };
        Ok(parse_axis(label, token))
    }
}

impl<R: BufRead, W: Write> AxisSource for PromptedReader<R, W> {
    fn read_axes(&mut self) -> Result<AxisPair> {
        let a = self.ask(MAJOR_PROMPT, "major")?;
        let b = self.ask(MINOR_PROMPT, "minor")?;
        Ok(AxisPair::new(a, b))
    }
}

/// Axes already known from the command line or the config file.
#[derive(Debug, Clone, Copy)]
pub struct FixedAxes(pub AxisPair);

impl AxisSource for FixedAxes {
    fn read_axes(&mut self) -> Result<AxisPair> {
        Ok(self.0)
    }
}
