use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("Invalid animal name or adoption fee!")]
    InvalidRecord,

    #[error("Animal not found in records!")]
    AnimalNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Operator input closed")]
    InputClosed,

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Terminal,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl ShelterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShelterError::InvalidRecord | ShelterError::AnimalNotFound => ErrorCategory::Domain,
            ShelterError::IoError(_) | ShelterError::InputClosed => ErrorCategory::Terminal,
            ShelterError::ConfigError { .. }
            | ShelterError::ConfigValidationError { .. }
            | ShelterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShelterError::InvalidRecord
            | ShelterError::AnimalNotFound
            | ShelterError::InputClosed => ErrorSeverity::Low,
            ShelterError::IoError(_) => ErrorSeverity::High,
            ShelterError::ConfigError { .. }
            | ShelterError::ConfigValidationError { .. }
            | ShelterError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Domain failures are reported to the operator and the session continues.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShelterError::InvalidRecord => "Use a non-blank name and a fee of zero or more",
            ShelterError::AnimalNotFound => "Check the spelling or add the animal first",
            ShelterError::IoError(_) => "Check that the terminal is still attached",
            ShelterError::InputClosed => "Start a new session to keep working",
            ShelterError::ConfigError { .. }
            | ShelterError::ConfigValidationError { .. }
            | ShelterError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or remove the --config flag"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelterError>;
