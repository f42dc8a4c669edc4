use thiserror::Error;

/// Errors raised by the pure command operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpError {
    #[error("count must be >= 1, got {0}")]
    InvalidCount(i64),

    #[error("integer overflow computing {a} + {b}")]
    Overflow { a: i64, b: i64 },
}

pub type OpResult<T> = Result<T, OpError>;
