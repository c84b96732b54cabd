use std::io::Error as IoError;

use serde_json::Error as JsonError;

#[derive(thiserror::Error, Debug)]
pub enum ClassifierError {
    #[error("Input matrix must have at least one sample and one feature")]
    EmptyInput,
    #[error("Number of samples in X ({features}) and y ({labels}) must match")]
    ShapeMismatch { features: usize, labels: usize },
    #[error("y should have exactly two classes (binary problem expected), found {found}")]
    ClassCount { found: usize },
    #[error("Labels must be totally ordered, found an incomparable pair")]
    IncomparableLabels,
    #[error("Model not fitted. Call fit() first.")]
    NotFitted,
    #[error("Number of features in X ({found}) doesn't match training data ({expected})")]
    FeatureMismatch { expected: usize, found: usize },
    #[error("Invalid value for {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Cannot sample decision boundary: {0}")]
    Unplottable(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error")]
    Io(#[from] IoError),
    #[error("Couldn't parse JSON")]
    Json(#[from] JsonError),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
