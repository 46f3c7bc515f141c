//! Error types for the miner.

use thiserror::Error;

use crate::mining::streaming::ProcessingPhase;
use crate::mining::Item;

/// Errors surfaced to callers of the miner.
///
/// Empty intersections, exhausted bases and an empty rank order are not
/// errors; the traversal handles them as ordinary transitions.
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("transaction table has no rows")]
    EmptyTable,

    #[error("malformed token {token:?} on line {line}")]
    MalformedToken { line: usize, token: String },

    #[error("minimum support must be positive, got {0}")]
    InvalidMinSupport(i64),

    #[error("posting list for item {item} is not strictly ascending within the table")]
    CorruptPostingList { item: Item },

    #[error("cannot {operation} in phase {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: ProcessingPhase,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;
