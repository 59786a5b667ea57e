use thiserror::Error;

#[derive(Error, Debug)]
pub enum EllipseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown formula: {name}")]
    UnknownFormulaError { name: String },
}

impl EllipseError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::CsvError(e) => format!("Could not write CSV output: {}", e),
            Self::SerializationError(e) => format!("Could not write JSON output: {}", e),
            Self::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
            Self::UnknownFormulaError { name } => {
                format!("'{}' does not name a known formula", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that standard input and output are available",
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Try the default table output format"
            }
            Self::ConfigParseError { .. } => "Fix the TOML syntax in the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Correct the setting in the configuration file or on the command line"
            }
            Self::UnknownFormulaError { .. } => {
                "Use one of: ramanujan1, ramanujan2, muir, hudson, holder, cantrell"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EllipseError>;
