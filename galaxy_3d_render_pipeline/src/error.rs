//! Error types for the Galaxy3D render pipeline
//!
//! Every fallible operation of the camera renderer returns [`Galaxy3dResult`]. Recoverable
//! situations (a camera that cannot be culled, a platform without texture copies)
//! are not errors: they are reported through return values or handled by fallbacks.

use std::fmt;

/// Result type for render pipeline operations
pub type Galaxy3dResult<T> = std::result::Result<T, Galaxy3dError>;

/// Render pipeline errors
#[derive(Debug, Clone)]
pub enum Galaxy3dError {
    /// Host command recorder or render context failure
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource access (undeclared target, unbound binding, unknown slot, ...)
    InvalidResource(String),

    /// Fallback material or texture creation failed
    InitializationFailed(String),

    /// A recorded pass failed while executing; the frame is abandoned
    PassFailed {
        /// Name of the failing pass
        pass: String,
        /// Underlying error
        source: Box<Galaxy3dError>,
    },
}

impl Galaxy3dError {
    /// Wrap an error raised by a pass
    pub fn pass_failed(pass: &str, source: Galaxy3dError) -> Self {
        Galaxy3dError::PassFailed { pass: pass.to_string(), source: Box::new(source) }
    }
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Galaxy3dError::OutOfMemory => write!(f, "Out of GPU memory"),
            Galaxy3dError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Galaxy3dError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Galaxy3dError::PassFailed { pass, source } => write!(f, "Pass '{}' failed: {}", pass, source),
        }
    }
}

impl std::error::Error for Galaxy3dError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Galaxy3dError::PassFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
