use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Fixture error in {fixture}: {message}")]
    FixtureError { fixture: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Fixture,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 執行檔的結束代碼，`Low` 仍視為成功
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_) | CatalogError::FixtureError { .. } => {
                ErrorCategory::Fixture
            }
            CatalogError::CsvError(_) | CatalogError::ZipError(_) => ErrorCategory::Output,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Fixture | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::IoError(_) => {
                "Check that the fixture and output paths exist and are accessible".to_string()
            }
            CatalogError::SerializationError(_) => {
                "Make sure the output data can be represented as JSON".to_string()
            }
            CatalogError::FixtureError { fixture, .. } => {
                format!("Verify that {} is valid JSON with the expected layout", fixture)
            }
            CatalogError::CsvError(_) | CatalogError::ZipError(_) => {
                "Retry the export or choose a different output format".to_string()
            }
            CatalogError::ConfigValidationError { field, .. }
            | CatalogError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Add '{}' to your configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not access a file: {}", e),
            CatalogError::FixtureError { fixture, message } => {
                format!("The data file {} could not be read: {}", fixture, message)
            }
            CatalogError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
