//! Error Types
//!
//! This module defines the error types used throughout the framework core.
//!
//! All public APIs that can fail return [`Result<T>`] which is an alias for
//! `std::result::Result<T, PigmentError>`.

use thiserror::Error;

/// The main error type for the Pigment framework core.
///
/// Each variant provides specific context about what went wrong.
#[derive(Error, Debug)]
pub enum PigmentError {
    /// A filter function descriptor was given an empty entry-point name.
    #[error("Shader function name must not be empty")]
    EmptyFunctionName,
}

/// Alias for `Result<T, PigmentError>`.
pub type Result<T> = std::result::Result<T, PigmentError>;
