//! Crate-level error types.

/// Errors surfaced by the estimator API.
///
/// Internal degenerate conditions (empty side of a split, constant feature
/// columns, single-row subsets) are not errors; they follow documented
/// fallback rules inside the tree modules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroveError {
    /// Row count of `X` does not match the length of `y`.
    #[error("X has {x_rows} rows but y has {y_len} values")]
    ShapeMismatch { x_rows: usize, y_len: usize },

    /// Feature count at predict time differs from the fitted matrix.
    #[error("expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// Zero samples or zero features.
    #[error("input arrays must be non-empty")]
    EmptyInput,

    /// Tree depth must be at least 1.
    #[error("depth must be >= 1, got {0}")]
    InvalidDepth(usize),

    /// Learning rate must be positive and finite.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f64),

    /// Candidate count per feature must be at least 1.
    #[error("split_iterations must be >= 1, got {0}")]
    InvalidSplitIterations(usize),

    /// `predict` was called before `fit`.
    #[error("estimator is not fitted; call fit before predict")]
    NotFitted,
}
