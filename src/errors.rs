//! Errors
//!
//! Custom error types used throughout the `cart` crate.
use thiserror::Error;

/// Errors that can occur when validating input or building a tree.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The dataset has no rows.
    #[error("Dataset is empty, at least one row is required.")]
    EmptyDataset,
    /// A row is too short to hold a feature and a label.
    #[error("Row {0} has length {1}, at least one feature and a label column are required.")]
    RowTooShort(usize, usize),
    /// A row has a different length from the first row.
    #[error("Row {0} has length {2}, but every row must have length {1}.")]
    RaggedRow(usize, usize, usize),
    /// NaN value found in the data.
    #[error("A NaN value was found in row {0}, column {1}.")]
    NanValueFound(usize, usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read a configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
    /// A leaf was requested for a group with no rows.
    #[error("Cannot compute a majority label for an empty group.")]
    EmptyGroup,
}
