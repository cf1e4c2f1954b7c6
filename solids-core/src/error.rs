/// Error taxonomy shared by generation and projection
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A solid kind name outside the fixed catalog was requested.
    #[error("unsupported solid kind: {0:?}")]
    UnsupportedKind(String),

    /// A size or tessellation parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A projection input or intermediate value is not a finite number.
    #[error("non-finite value in {context}")]
    NumericDomain { context: &'static str },
}

impl GeometryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
