use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl TodoError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TodoError::IoError(e) => format!("File operation failed: {}", e),
            TodoError::ConfigError { message } => format!("Configuration problem: {}", message),
            TodoError::ConfigValidationError { field, .. } => {
                format!("The configuration field '{}' could not be read", field)
            }
            TodoError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
            TodoError::ServerError { message } => format!("HTTP server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TodoError::IoError(_) => "Check that the file exists and is readable",
            TodoError::ConfigError { .. } | TodoError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            TodoError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the configuration file"
            }
            TodoError::ServerError { .. } => {
                "Make sure the address is free or choose another port with --port"
            }
        }
    }

    /// 依錯誤類型決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::ConfigError { .. }
            | TodoError::ConfigValidationError { .. }
            | TodoError::InvalidConfigValueError { .. } => 1,
            TodoError::ServerError { .. } => 2,
            TodoError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
