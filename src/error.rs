//! Error types for the two-layer network
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! propagate failures with `?` from construction through training.

/// Errors raised while building, evaluating or training a network.
#[derive(thiserror::Error, Debug)]
pub enum NetError {
    /// A network size (input, hidden or output) was zero.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Input batch or label array does not agree with the network shape.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A class label falls outside `[0, num_classes)`.
    #[error("Label {label} out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    /// Scores or loss became non-finite (usually a diverging learning rate).
    #[error("Numeric instability: {0}")]
    NumericInstability(String),

    /// A configuration value was rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
