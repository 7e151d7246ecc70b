//! Error types for Greenroom operations.
//!
//! This module defines [`GreenroomError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GreenroomError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GreenroomError::Other`) for unexpected errors
//! - Capability probes never return errors: degraded capabilities resolve to
//!   warning outcomes instead (see `check::probes`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Greenroom operations.
#[derive(Debug, Error)]
pub enum GreenroomError {
    /// Probe plan file not found at expected location.
    #[error("Probe plan not found: {path}")]
    PlanNotFound { path: PathBuf },

    /// Failed to parse a probe plan file.
    #[error("Failed to parse probe plan at {path}: {message}")]
    PlanParseError { path: PathBuf, message: String },

    /// Invalid probe plan structure or values.
    #[error("Invalid probe plan: {message}")]
    PlanValidationError { message: String },

    /// Plan references a probe name not in the catalog.
    #[error("Unknown probe: {name}")]
    UnknownProbe { name: String },

    /// The notification permission request could not be delivered.
    #[error("Permission request failed: {message}")]
    PermissionRequestFailed { message: String },

    /// Interactive prompt was aborted or the terminal went away.
    #[error("Terminal interaction failed: {message}")]
    TerminalInteraction { message: String },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    ReportSerialization(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Greenroom operations.
pub type Result<T> = std::result::Result<T, GreenroomError>;
