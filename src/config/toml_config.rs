use crate::core::formulas::find_formula;
use crate::domain::model::{InputMode, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EllipseError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_one_of, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub formulas: Option<FormulaConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub major: Option<f32>,
    pub minor: Option<f32>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub include: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EllipseError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${MAJOR_AXIS})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EllipseError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.input.major.is_some() != self.input.minor.is_some() {
            return Err(EllipseError::InvalidConfigValueError {
                field: "input".to_string(),
                value: format!("major = {:?}, minor = {:?}", self.input.major, self.input.minor),
                reason: "major and minor must be given together".to_string(),
            });
        }

        if let Some(mode) = &self.input.mode {
            validate_one_of("input.mode", mode, &InputMode::NAMES)?;
        }

        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        if let Some(include) = self.formula_selection() {
            validate_non_empty_list("formulas.include", include)?;
            for name in include {
                validate_non_empty_string("formulas.include", name)?;
                if find_formula(name).is_none() {
                    return Err(EllipseError::UnknownFormulaError { name: name.clone() });
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn major(&self) -> Option<f32> {
        self.input.major
    }

    fn minor(&self) -> Option<f32> {
        self.input.minor
    }

    fn input_mode(&self) -> Option<InputMode> {
        self.input.mode.as_deref().and_then(|mode| mode.parse().ok())
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.format.as_deref().and_then(|format| format.parse().ok())
    }

    fn formula_selection(&self) -> Option<&[String]> {
        self.formulas.as_ref()?.include.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
major = 5.0
minor = 3
mode = "prompted"

[output]
format = "json"

[formulas]
include = ["ramanujan1", "Muir's Formula"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.major(), Some(5.0));
        assert_eq!(config.minor(), Some(3.0));
        assert_eq!(config.input_mode(), Some(InputMode::Prompted));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.formula_selection().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.major(), None);
        assert_eq!(config.output_format(), None);
        assert!(config.formula_selection().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ELLIPSE_TEST_MAJOR_AXIS", "7.5");

        let toml_content = r#"
[input]
major = ${ELLIPSE_TEST_MAJOR_AXIS}
minor = 2.5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.major(), Some(7.5));

        std::env::remove_var("ELLIPSE_TEST_MAJOR_AXIS");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = TomlConfig::from_toml_str("[output\nformat = ").unwrap_err();
        assert!(matches!(err, EllipseError::ConfigParseError { .. }));
    }

    #[test]
    fn test_unknown_format_fails_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, EllipseError::InvalidConfigValueError { ref field, .. } if field == "output.format")
        );
    }

    #[test]
    fn test_unknown_mode_fails_validation() {
        let config = TomlConfig::from_toml_str("[input]\nmode = \"interactive\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_formula_fails_validation() {
        let config =
            TomlConfig::from_toml_str("[formulas]\ninclude = [\"muir\", \"kepler\"]\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EllipseError::UnknownFormulaError { ref name } if name == "kepler"));
    }

    #[test]
    fn test_empty_include_fails_validation() {
        let config = TomlConfig::from_toml_str("[formulas]\ninclude = []\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lone_axis_fails_validation() {
        let config = TomlConfig::from_toml_str("[input]\nmajor = 4.0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, EllipseError::InvalidConfigValueError { ref field, .. } if field == "input")
        );
    }

    #[test]
    fn test_axes_are_not_range_checked() {
        let config = TomlConfig::from_toml_str("[input]\nmajor = -4.0\nminor = 0.0\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/ellipse.toml").unwrap_err();
        assert!(matches!(err, EllipseError::IoError(_)));
    }
}
