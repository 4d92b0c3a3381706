//! Centralized error handling for ncgen
//!
//! Every failure is propagated to the caller unchanged; nothing here retries
//! or recovers.

use std::fmt;

/// Main error type for ncgen operations
#[derive(Debug)]
pub enum NcGenError {
    /// NetCDF library errors (create, define, write)
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Malformed fixture configuration file
    ConfigError(serde_json::Error),

    /// Grid axis violates `count > 0` / `step != 0`
    InvalidGrid { axis: String, message: String },

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// A variable was declared over a dimension the file does not have
    DimensionNotFound { dim: String },
}

impl fmt::Display for NcGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NcGenError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            NcGenError::IoError(e) => write!(f, "I/O error: {}", e),
            NcGenError::ConfigError(e) => write!(f, "Invalid fixture configuration: {}", e),
            NcGenError::InvalidGrid { axis, message } => {
                write!(f, "Invalid grid axis '{}': {}", axis, message)
            }
            NcGenError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            NcGenError::DimensionNotFound { dim } => {
                write!(f, "Dimension '{}' not found in file", dim)
            }
        }
    }
}

impl std::error::Error for NcGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NcGenError::NetCDFError(e) => Some(e),
            NcGenError::IoError(e) => Some(e),
            NcGenError::ConfigError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for NcGenError {
    fn from(error: netcdf::Error) -> Self {
        NcGenError::NetCDFError(error)
    }
}

impl From<std::io::Error> for NcGenError {
    fn from(error: std::io::Error) -> Self {
        NcGenError::IoError(error)
    }
}

impl From<serde_json::Error> for NcGenError {
    fn from(error: serde_json::Error) -> Self {
        NcGenError::ConfigError(error)
    }
}

/// Result type alias for ncgen operations
pub type Result<T> = std::result::Result<T, NcGenError>;
