use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Course '{title}' is already registered.")]
    DuplicateCourse { title: String },

    #[error("Course '{title}' not found.")]
    CourseNotFound { title: String },

    #[error("Maximum capacity of {capacity} reached for course '{title}'.")]
    CapacityReached { title: String, capacity: u32 },

    #[error("Participant {name} is already enrolled.")]
    DuplicateParticipant { name: String },

    #[error("'{input}' is not a valid number: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Domain,
    Input,
    Persistence,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::ValidationError { .. } => ErrorCategory::Validation,
            RegistryError::DuplicateCourse { .. }
            | RegistryError::CourseNotFound { .. }
            | RegistryError::CapacityReached { .. }
            | RegistryError::DuplicateParticipant { .. } => ErrorCategory::Domain,
            RegistryError::InvalidNumber { .. } => ErrorCategory::Input,
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => {
                ErrorCategory::Persistence
            }
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Domain | ErrorCategory::Input => {
                ErrorSeverity::Low
            }
            ErrorCategory::Persistence => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// Business-rule and construction failures, as opposed to unexpected ones.
    pub fn is_expected(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Domain
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::ValidationError { .. } => "Fill in every field with a non-blank value",
            RegistryError::DuplicateCourse { .. } => "Choose a title that is not already in use",
            RegistryError::CourseNotFound { .. } => {
                "List the courses and use the exact (case-sensitive) title"
            }
            RegistryError::CapacityReached { .. } => "Register the participant in another course",
            RegistryError::DuplicateParticipant { .. } => "The participant is already enrolled",
            RegistryError::InvalidNumber { .. } => "Enter a whole number",
            RegistryError::IoError(_) => "Check that the data file location is writable",
            RegistryError::SerializationError(_) => {
                "Move the data file aside and start with an empty registry"
            }
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Persistence => format!("Could not access stored data: {}", self),
            _ => self.to_string(),
        }
    }
}
