use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotiError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Payload decode error: {0}")]
    DecodeError(#[from] plist::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Home directory could not be determined")]
    HomeDirError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Database,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NotiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NotiError::DatabaseError(_) => ErrorCategory::Database,
            NotiError::DecodeError(_)
            | NotiError::SerializationError(_)
            | NotiError::ProcessingError { .. } => ErrorCategory::Data,
            NotiError::ConfigError { .. } | NotiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            NotiError::IoError(_) | NotiError::HomeDirError => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Database => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定 process exit code
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotiError::DatabaseError(_) => {
                "Check that the notification database exists and that this terminal has Full Disk Access"
            }
            NotiError::DecodeError(_) => "The record payload is not a readable property list",
            NotiError::IoError(_) => "Check file permissions and available disk space",
            NotiError::SerializationError(_) => "Retry with --format table",
            NotiError::HomeDirError => "Set HOME or pass --db-path explicitly",
            NotiError::ConfigError { .. } | NotiError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the config file"
            }
            NotiError::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NotiError::DatabaseError(e) => format!("Could not read the notification database: {}", e),
            NotiError::HomeDirError => "Could not find your home directory".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let config = NotiError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::High);

        assert_eq!(NotiError::HomeDirError.severity(), ErrorSeverity::Critical);

        let processing = NotiError::ProcessingError {
            message: "oops".to_string(),
        };
        assert_eq!(processing.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_exit_code_per_category() {
        let config = NotiError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let database = NotiError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(database.category(), ErrorCategory::Database);
        assert_eq!(database.exit_code(), 1);

        let data = NotiError::ProcessingError {
            message: "bad date".to_string(),
        };
        assert_eq!(data.category(), ErrorCategory::Data);
        assert_eq!(data.exit_code(), 2);

        let io = NotiError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.exit_code(), 3);
        assert_eq!(NotiError::HomeDirError.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = NotiError::InvalidConfigValueError {
            field: "app_id".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty".to_string(),
        };
        assert!(err.user_friendly_message().contains("app_id"));
        assert!(NotiError::HomeDirError
            .user_friendly_message()
            .contains("home directory"));
    }
}
