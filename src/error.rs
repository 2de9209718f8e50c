//! Errors
//!
//! Error type shared by the data, tree and export modules.
use thiserror::Error;

/// Errors that can occur while loading data, building or using a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Training needs at least one row.
    #[error("The dataset is empty.")]
    EmptyDataset,
    /// A row needs at least one feature column and the label column.
    #[error("Rows need at least 2 columns (features + label), found {0}.")]
    TooFewColumns(usize),
    /// Rows of a dataset must all have the same length.
    #[error("Row {row} has {found} columns, expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Prediction input doesn't match the number of features seen during training.
    #[error("Expected {expected} features, but {found} were provided.")]
    FeatureCountMismatch { expected: usize, found: usize },
    /// Two sequences that should pair up element by element have different lengths.
    #[error("Predictions and labels are of different sizes ({0} vs {1}).")]
    LengthMismatch(usize, usize),
    /// The classifier has no tree yet.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// First value is the name of the parameter, second is the reason.
    #[error("Invalid value for {0}: {1}")]
    InvalidParameter(String, String),
    /// A feature label was requested for an index the label list doesn't cover.
    #[error("No feature name for feature index {0}.")]
    MissingFeatureName(usize),
    /// A cell could not be read as a number.
    #[error("Couldn't parse value {value:?} in row {row}, column {column} as a number.")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
    /// The template has nowhere to put the tree.
    #[error("{0} has no tree placeholder.")]
    Template(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
