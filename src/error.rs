//! Error types and handling for `VanScout`

use thiserror::Error;

/// Main error type for the `VanScout` application
#[derive(Error, Debug)]
pub enum VanScoutError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Catalog data could not be loaded or failed its invariants
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl VanScoutError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            VanScoutError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            VanScoutError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            VanScoutError::Catalog { .. } => {
                "The van catalog could not be loaded. Please check the catalog file.".to_string()
            }
            VanScoutError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            VanScoutError::General { message } => message.clone(),
        }
    }
}
