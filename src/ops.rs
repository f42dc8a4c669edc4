//! Pure command operations and their result records.
//!
//! Each operation builds exactly one immutable result record; the CLI layer
//! prints the single field and drops the record. No state is retained across
//! invocations.

use tracing::info;

use crate::errors::{OpError, OpResult};

/// Result of `greet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetResult {
    pub message: String,
}

/// Result of `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddResult {
    pub total: i64,
}

/// Result of `repeat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatResult {
    pub output: String,
}

/// Build the greeting `"Hello, {name}!"`, uppercased when `upper` is set.
pub fn greet(name: &str, upper: bool) -> GreetResult {
    let mut message = format!("Hello, {name}!");
    if upper {
        message = message.to_uppercase();
    }
    info!("Generated greeting for {}", name);
    GreetResult { message }
}

/// Add two integers. Overflow is a validation error, not a wrap.
pub fn add(a: i64, b: i64) -> OpResult<AddResult> {
    let total = a.checked_add(b).ok_or(OpError::Overflow { a, b })?;
    info!("Computed sum {}", total);
    Ok(AddResult { total })
}

/// Join `count` copies of `text` with `sep`. `count` must be >= 1.
pub fn repeat(text: &str, count: i64, sep: &str) -> OpResult<RepeatResult> {
    if count < 1 {
        return Err(OpError::InvalidCount(count));
    }
    let output = vec![text; count as usize].join(sep);
    info!("Repeated text {} times", count);
    Ok(RepeatResult { output })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_formats_name() {
        assert_eq!(greet("world", false).message, "Hello, world!");
    }

    #[test]
    fn repeat_single_copy_has_no_separator() {
        let result = repeat("ab", 1, ",").unwrap();
        assert_eq!(result.output, "ab");
    }
}
