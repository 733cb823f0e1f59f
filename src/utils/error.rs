use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormfillrError {
    #[error("Generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("Nothing to export: no records have been generated")]
    NothingGenerated,

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Generation,
    Usage,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormfillrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationFailed { .. } => ErrorCategory::Generation,
            Self::NothingGenerated => ErrorCategory::Usage,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者操作順序問題，不算失敗
            Self::NothingGenerated => ErrorSeverity::Low,
            Self::GenerationFailed { .. } => ErrorSeverity::Medium,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::GenerationFailed { .. } => "Generation error".to_string(),
            Self::NothingGenerated => "Generate first".to_string(),
            Self::IoError(e) => format!("Could not write output: {}", e),
            Self::SerializationError(e) => format!("Could not encode records: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Missing setting: {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Generation => "Run the command again; generation is safe to retry",
            ErrorCategory::Usage => "Generate records before exporting them",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Fix the reported setting and try again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormfillrError>;
