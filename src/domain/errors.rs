//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Geocoding produced no candidate for the requested place name
    LocationNotFound,
    /// Validation error with message
    Validation(String),
    /// External service error on a pipeline-fatal call
    External(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::LocationNotFound => write!(f, "Location not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
