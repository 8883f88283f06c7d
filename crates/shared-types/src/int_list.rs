//! Comma-joined base-10 integer lists, as used in payloads and stored records.

use std::num::ParseIntError;

use thiserror::Error;

use crate::LIST_DELIMITER;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntListError {
    /// Item is empty or has a character other than `0-9` (signs, spaces).
    #[error("{0:?} is not a base-10 unsigned integer")]
    NotDigits(String),

    #[error(transparent)]
    OutOfRange(#[from] ParseIntError),
}

/// Join integers with `,` (`[1, 2, 3]` → `"1,2,3"`).
pub fn encode_int_list(values: &[u64]) -> String {
    let delimiter = LIST_DELIMITER.to_string();
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(delimiter.as_str())
}

/// Parse a `,`-joined list of unsigned integers.
///
/// Items must be ASCII digits only, so every accepted list re-encodes to
/// the same text.
pub fn decode_int_list(value: &str) -> Result<Vec<u64>, IntListError> {
    value
        .split(LIST_DELIMITER)
        .map(|item| {
            if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
                return Err(IntListError::NotDigits(item.to_string()));
            }
            Ok(item.parse::<u64>()?)
        })
        .collect()
}
