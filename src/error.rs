//! Crate error type
//!
//! The physics step itself is total. Errors only surface at the boundary:
//! building geometry and loading settings.

use std::fmt;

#[derive(Debug)]
pub enum SandboxError {
    /// Rectangle with a zero or negative extent (its axes cannot be normalized)
    DegenerateRect { width: f64, height: f64 },
    /// NaN or infinite value where a finite coordinate is required
    NonFinite(&'static str),
    /// A setting is out of its valid range
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },
    /// Settings document could not be parsed
    Parse(serde_json::Error),
    /// Settings file could not be read
    Io(std::io::Error),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::DegenerateRect { width, height } => {
                write!(f, "rectangle extents must be positive (got {width} x {height})")
            }
            SandboxError::NonFinite(what) => write!(f, "{what} must be finite"),
            SandboxError::InvalidSetting { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
            SandboxError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            SandboxError::Io(e) => write!(f, "failed to read settings: {e}"),
        }
    }
}

impl std::error::Error for SandboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SandboxError::Parse(e) => Some(e),
            SandboxError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SandboxError {
    fn from(e: serde_json::Error) -> Self {
        SandboxError::Parse(e)
    }
}

impl From<std::io::Error> for SandboxError {
    fn from(e: std::io::Error) -> Self {
        SandboxError::Io(e)
    }
}
