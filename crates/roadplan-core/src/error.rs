//! Error types for the road-network store.

use thiserror::Error;

/// Result type for roadplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roadplan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// City name was empty or only whitespace
    #[error("City name must not be empty.")]
    EmptyName,

    /// A city with this name is already recorded
    #[error("City '{0}' already exists.")]
    DuplicateCity(String),

    /// No city with this name is recorded
    #[error("City '{0}' not found.")]
    UnknownCity(String),

    /// Both ends of a road name the same city
    #[error("A road needs two different cities, got '{0}' twice.")]
    SameCity(String),

    /// Budget requested for a pair with no road
    #[error("No road exists between {from} and {to}.")]
    NoRoad { from: String, to: String },

    /// 1-based city index outside `[1, count]`
    #[error("Invalid index {index}: {count} cities recorded.")]
    IndexOutOfRange { index: usize, count: usize },

    /// Budget was negative or not a finite number
    #[error("Invalid budget {0}: must be a non-negative number.")]
    InvalidBudget(f64),

    /// Batch of cities to add was empty
    #[error("Number of cities to add must be positive.")]
    InvalidCount,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
