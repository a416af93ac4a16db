use std::fmt::Display;

/// Application-wide error types for the gridtint inspector.
///
/// The theme engine itself never fails; everything here comes from the
/// surface around it: reading configuration, validating it, setting up
/// logging and writing the report.
///
/// # Error Categories
///
/// - [`Config`] - Configuration files or environment could not be loaded
/// - [`Validation`] - Configuration loaded but holds out-of-range values
/// - [`Logger`] - The global logger could not be installed
/// - [`Io`] - Writing the report failed
/// - [`Serialization`] - The JSON report could not be produced
///
/// [`Config`]: AppError::Config
/// [`Validation`]: AppError::Validation
/// [`Logger`]: AppError::Logger
/// [`Io`]: AppError::Io
/// [`Serialization`]: AppError::Serialization
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading errors.
    Config(String),

    /// Configuration validation errors, already formatted for the user.
    Validation(String),

    /// Logger setup errors.
    Logger(String),

    /// File system and output stream errors.
    Io(String),

    /// Report serialization errors.
    Serialization(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::Logger(msg) => write!(f, "Logger Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
