use thiserror::Error;

/// Errors surfaced by curve lookup and transition configuration.
///
/// Curve evaluation itself never fails.
#[derive(Debug, Error)]
pub enum EaseError {
    /// A host passed a curve ordinal outside the known set.
    #[error("invalid curve kind ordinal {0} (expected 0..32)")]
    InvalidCurveKind(u32),

    #[error("unknown curve name `{0}`")]
    UnknownCurveName(String),

    /// A transition config parsed but holds values the controller cannot use.
    #[error("invalid transition config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse transition config: {0}")]
    Parse(#[from] serde_json::Error),
}
