//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::codegen::CodegenError;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Bundle {
        message: String,
        #[source]
        source: glossa_i18n::I18nError,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Bundle { .. } => "E003",
            Self::Validation { .. } => "E004",
        }
    }

    /// Get the process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Bundle { .. } => 1,
            Self::Validation { .. } => 5,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(source: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {source}", path.display()),
            source,
            path: Some(path),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::validation(format!("Invalid JSON: {err}"), None)
    }
}

impl From<glossa_common_config::ConfigError> for CliError {
    fn from(err: glossa_common_config::ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check your glossa.yaml file".to_string()),
        }
    }
}

impl From<glossa_i18n::I18nError> for CliError {
    fn from(err: glossa_i18n::I18nError) -> Self {
        Self::Bundle {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<glossa_bundle::BundleError> for CliError {
    fn from(err: glossa_bundle::BundleError) -> Self {
        glossa_i18n::I18nError::from(err).into()
    }
}

impl From<CodegenError> for CliError {
    fn from(err: CodegenError) -> Self {
        Self::validation(err.to_string(), Some("key"))
    }
}
