use crate::utils::error::{EllipseError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts `value` when it matches one of `allowed`, ignoring ASCII case.
pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let normalized = value.trim().to_ascii_lowercase();
    if allowed.iter().any(|candidate| *candidate == normalized) {
        return Ok(());
    }

    Err(EllipseError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(EllipseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EllipseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_of() {
        let allowed = ["table", "csv", "json"];
        assert!(validate_one_of("output.format", "csv", &allowed).is_ok());
        assert!(validate_one_of("output.format", "JSON", &allowed).is_ok());
        assert!(validate_one_of("output.format", "xml", &allowed).is_err());
        assert!(validate_one_of("output.format", "", &allowed).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("formulas.include", &["muir"]).is_ok());
        let empty: [String; 0] = [];
        assert!(validate_non_empty_list("formulas.include", &empty).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("formulas.include", "holder").is_ok());
        assert!(validate_non_empty_string("formulas.include", "   ").is_err());
    }
}
