use crate::utils::error::{TodoError, Result};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TodoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    validate_range(field_name, port, 1, u16::MAX)
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    let normalized = level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&normalized.as_str()) {
        return Err(TodoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
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
        return Err(TodoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.host", "127.0.0.1").is_ok());
        assert!(validate_non_empty_string("server.host", "").is_err());
        assert!(validate_non_empty_string("server.host", "   ").is_err());
    }

    #[test]
    fn test_validate_port() {
        assert!(validate_port("server.port", 8080).is_ok());
        assert!(validate_port("server.port", u16::MAX).is_ok());
        assert!(validate_port("server.port", 0).is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "info").is_ok());
        assert!(validate_log_level("logging.level", "DEBUG").is_ok());
        assert!(validate_log_level("logging.level", "verbose").is_err());
    }
}
