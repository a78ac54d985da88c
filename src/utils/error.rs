use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Mapping file parse error: {0}")]
    MappingFileError(#[from] toml::de::Error),

    #[error("Mapping file write error: {0}")]
    MappingFileWriteError(#[from] toml::ser::Error),

    #[error("Prompt failed: {message}")]
    PromptError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Interaction,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PrepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrepError::CsvError(_) | PrepError::ProcessingError { .. } => ErrorCategory::Input,
            PrepError::MappingFileError(_)
            | PrepError::ConfigError { .. }
            | PrepError::MissingConfigError { .. }
            | PrepError::InvalidConfigValueError { .. }
            | PrepError::ValidationError { .. } => ErrorCategory::Configuration,
            PrepError::PromptError { .. } => ErrorCategory::Interaction,
            PrepError::IoError(_)
            | PrepError::SerializationError(_)
            | PrepError::MappingFileWriteError(_) => ErrorCategory::Output,
            PrepError::InvalidState { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Interaction => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrepError::CsvError(e) => format!("The input file could not be read as CSV: {}", e),
            PrepError::IoError(e) => format!("A file could not be read or written: {}", e),
            PrepError::PromptError { .. } => "The mapping review was interrupted".to_string(),
            PrepError::MissingConfigError { field } => format!("Missing required option: {}", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrepError::CsvError(_) | PrepError::ProcessingError { .. } => {
                "Check that the file is a comma-separated CSV with a header row"
            }
            PrepError::IoError(_) => "Check that the paths exist and are writable",
            PrepError::MappingFileError(_) => {
                "Check the mapping file syntax: a [columns] table of field = \"Column\" entries"
            }
            PrepError::PromptError { .. } => {
                "Run again in an interactive terminal, or pass --yes to accept the proposed mapping"
            }
            PrepError::ConfigError { .. }
            | PrepError::MissingConfigError { .. }
            | PrepError::InvalidConfigValueError { .. }
            | PrepError::ValidationError { .. } => {
                "Run with --dry-run to see the available fields and the columns found in the file"
            }
            PrepError::SerializationError(_) | PrepError::MappingFileWriteError(_) => {
                "Retry with --verbose and report the output"
            }
            PrepError::InvalidState { .. } => "This is a bug; please report it with --verbose output",
        }
    }
}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for PrepError {
    fn from(err: dialoguer::Error) -> Self {
        PrepError::PromptError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
