//! Evaluation spec loading errors

/// Errors raised while loading an evaluation spec file
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Cannot read spec file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid spec JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected exactly 2 class labels, got {0}")]
    LabelCount(usize),
}
