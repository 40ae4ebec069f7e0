//! Error types and handling for `TravelRec` application

use thiserror::Error;

/// Main error type for the `TravelRec` application
#[derive(Error, Debug)]
pub enum TravelRecError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog fetch or parse errors
    #[error("Data unavailable: {message}")]
    Data { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

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

impl TravelRecError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
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
            TravelRecError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelRecError::Data { .. } => {
                "Error loading recommendations. Please try again.".to_string()
            }
            TravelRecError::Validation { message } => message.clone(),
            TravelRecError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelRecError::General { message } => message.clone(),
        }
    }
}
