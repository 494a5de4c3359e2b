//! Error types for the Terra3D engine
//!
//! The error taxonomy is narrow by design: invalid configuration is
//! caught at construction/insertion time, degenerate input is clamped
//! at the boundary, and missing optional state (geometry, light) is
//! not an error at all.

use std::fmt;

/// Result type for Terra3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Terra3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (reported by a RenderQueue implementation)
    BackendError(String),

    /// Invalid resource (geometry, material)
    InvalidResource(String),

    /// Invalid configuration (scene assembly, camera parameters)
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error::InvalidResource`, logging it with ERROR severity.
///
/// # Example
///
/// ```no_run
/// # use terra_3d_engine::engine_err;
/// # fn check(count: u32) -> terra_3d_engine::terra3d::Result<()> {
/// let err = engine_err!("terra3d::Geometry", "index {} out of bounds", count);
/// # Err(err)
/// # }
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        $crate::terra3d::Error::InvalidResource(format!($($arg)*))
    }};
}

/// Log an ERROR and return `Err(Error::InvalidResource)` from the
/// current function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
