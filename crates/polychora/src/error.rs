//! Errors for caller-supplied inputs.
//!
//! Integrity violations inside the discovery phases (non-uniform vertex or
//! face degree) are not represented here: they indicate a defect in the input
//! data or the code and abort via `assert!`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    InvalidParams { reason: String },
    UnknownPolytope { name: String },
}

impl MeshError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid mesh params: {reason}"),
            Self::UnknownPolytope { name } => write!(
                f,
                "unknown polytope `{name}` (expected one of 5-cell, 8-cell, 16-cell, 24-cell, 120-cell, 600-cell)"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
