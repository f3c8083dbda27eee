use crate::utils::error::{FleetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Rejects NaN, infinities and negative quantities (weights, limits, speeds).
pub fn validate_quantity(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FleetError::InvalidInput {
            field: field_name.to_string(),
            reason: format!("{} is not a non-negative number", value),
        });
    }
    Ok(())
}

pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::InvalidInput {
            field: field_name.to_string(),
            reason: "Identifier cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 8080u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("base_weight", 0.0).is_ok());
        assert!(validate_quantity("base_weight", 1500.5).is_ok());
        assert!(validate_quantity("base_weight", -1.0).is_err());
        assert!(validate_quantity("base_weight", f64::NAN).is_err());
        assert!(validate_quantity("base_weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("unit_id", "FL-001").is_ok());
        assert!(validate_identifier("unit_id", "   ").is_err());
    }
}
