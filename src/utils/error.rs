use thiserror::Error;

#[derive(Error, Debug)]
pub enum VroomError {
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

    #[error("Cannot build a {kind} without '{attribute}'")]
    MissingAttributeError { kind: String, attribute: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl VroomError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VroomError::IoError(_) | VroomError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VroomError::IoError(_) => "Check that the file exists and is readable",
            VroomError::SerializationError(_) => "Try --output text",
            VroomError::ConfigError { .. } => "Check the garage file is valid TOML",
            VroomError::InvalidConfigValueError { .. } => "Fix the value and run again",
            VroomError::MissingAttributeError { .. } => {
                "Pass both --wheel-size and --wheel-number (or set them in the garage file)"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VroomError::MissingAttributeError { kind, attribute } => {
                format!("A {} needs a {} to be built", kind, attribute)
            }
            VroomError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VroomError>;
