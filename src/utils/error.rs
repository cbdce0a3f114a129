use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown job board: {name}")]
    UnknownBoardError { name: String },

    #[error("Generated URL for {board} is invalid: {reason}")]
    InvalidUrlError { board: String, reason: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HubError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HubError::ConfigValidationError { .. }
            | HubError::InvalidConfigValueError { .. }
            | HubError::UnknownBoardError { .. } => ErrorCategory::Configuration,
            HubError::IoError(_)
            | HubError::SerializationError(_)
            | HubError::CsvError(_)
            | HubError::RenderError { .. } => ErrorCategory::Output,
            HubError::InvalidUrlError { .. } => ErrorCategory::Generation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HubError::IoError(_) => ErrorSeverity::Critical,
            HubError::InvalidUrlError { .. } => ErrorSeverity::High,
            HubError::SerializationError(_) | HubError::CsvError(_) | HubError::RenderError { .. } => {
                ErrorSeverity::High
            }
            HubError::ConfigValidationError { .. }
            | HubError::InvalidConfigValueError { .. }
            | HubError::UnknownBoardError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HubError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            HubError::SerializationError(_) | HubError::CsvError(_) | HubError::RenderError { .. } => {
                "Try a different --format, or run with --verbose for details".to_string()
            }
            HubError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in your TOML configuration", field)
            }
            HubError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            HubError::UnknownBoardError { .. } => format!(
                "Use one of: {}",
                crate::core::boards::Board::ALL
                    .iter()
                    .map(|b| b.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            HubError::InvalidUrlError { .. } => {
                "Report the search terms that produced this link".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Output => format!("Could not write the dashboard: {}", self),
            ErrorCategory::Generation => format!("Could not build job board links: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
