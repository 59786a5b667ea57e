pub mod settings;
pub mod toml_config;

pub use settings::RunSettings;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::domain::model::{InputMode, OutputFormat};
    use crate::domain::ports::ConfigProvider;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "ellipse-circumference")]
    #[command(about = "Compare closed-form approximations of an ellipse's circumference")]
    #[command(
        long_about = "Reads the major and minor semi-axes (from stdin unless both are given as \
                      flags) and prints one row per approximation formula."
    )]
    pub struct CliConfig {
        /// Major semi-axis length
        #[arg(short = 'a', long, allow_negative_numbers = true, requires = "minor")]
        pub major: Option<f32>,

        /// Minor semi-axis length
        #[arg(short = 'b', long, allow_negative_numbers = true, requires = "major")]
        pub minor: Option<f32>,

        /// How to read the axes from stdin
        #[arg(long, value_enum)]
        pub input_mode: Option<InputMode>,

        /// Shorthand for `--input-mode prompted`
        #[arg(long, conflicts_with = "input_mode")]
        pub prompt: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn major(&self) -> Option<f32> {
            self.major
        }

        fn minor(&self) -> Option<f32> {
            self.minor
        }

        fn input_mode(&self) -> Option<InputMode> {
            self.input_mode
                .or_else(|| self.prompt.then_some(InputMode::Prompted))
        }

        fn output_format(&self) -> Option<OutputFormat> {
            self.format
        }

        fn formula_selection(&self) -> Option<&[String]> {
            None
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_axes_and_format() {
            let config = CliConfig::try_parse_from([
                "ellipse-circumference",
                "-a",
                "5",
                "--minor",
                "3.5",
                "--format",
                "csv",
            ])
            .unwrap();
            assert_eq!(config.major(), Some(5.0));
            assert_eq!(config.minor(), Some(3.5));
            assert_eq!(config.output_format(), Some(OutputFormat::Csv));
            assert_eq!(config.input_mode(), None);
        }

        #[test]
        fn test_negative_axis_is_accepted() {
            let config =
                CliConfig::try_parse_from(["ellipse-circumference", "-a", "-5", "-b", "3"])
                    .unwrap();
            assert_eq!(config.major(), Some(-5.0));
        }

        #[test]
        fn test_lone_axis_is_rejected() {
            assert!(CliConfig::try_parse_from(["ellipse-circumference", "-a", "5"]).is_err());
        }

        #[test]
        fn test_input_mode_flag() {
            let config = CliConfig::try_parse_from([
                "ellipse-circumference",
                "--input-mode",
                "combined",
            ])
            .unwrap();
            assert_eq!(config.input_mode(), Some(InputMode::Combined));

            assert!(CliConfig::try_parse_from([
                "ellipse-circumference",
                "--input-mode",
                "combined",
                "--prompt",
            ])
            .is_err());
        }

        #[test]
        fn test_prompt_flag() {
            let config =
                CliConfig::try_parse_from(["ellipse-circumference", "--prompt", "-v"]).unwrap();
            assert_eq!(config.input_mode(), Some(InputMode::Prompted));
            assert!(config.verbose);
        }
    }
}
