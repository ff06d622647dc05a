use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("{token:?} is not a sequence of I, V, X, L, C, D or M")]
    InvalidNumeral { token: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RomanError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::InvalidNumeral { .. } => ErrorCategory::Input,
            RomanError::ConfigError { .. }
            | RomanError::ValidationError { .. }
            | RomanError::TomlError(_) => ErrorCategory::Config,
            RomanError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RomanError::InvalidNumeral { .. } => ErrorSeverity::High,
            RomanError::ConfigError { .. } | RomanError::ValidationError { .. } => {
                ErrorSeverity::Medium
            }
            RomanError::IoError(_) | RomanError::TomlError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::InvalidNumeral { token } => {
                format!("{:?} is not a roman number", token)
            }
            RomanError::ConfigError { message } | RomanError::ValidationError { message } => {
                format!("Configuration problem: {}", message)
            }
            RomanError::IoError(e) => format!("Could not read input: {}", e),
            RomanError::TomlError(e) => format!("Batch file is not valid TOML: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RomanError::InvalidNumeral { .. } => {
                "Use only the symbols I, V, X, L, C, D and M, in upper case"
            }
            RomanError::ConfigError { .. } | RomanError::ValidationError { .. } => {
                "Check the supplied arguments or batch file against --help"
            }
            RomanError::IoError(_) => "Check that the file exists and is readable",
            RomanError::TomlError(_) => "Check the batch file against the documented layout",
        }
    }
}
