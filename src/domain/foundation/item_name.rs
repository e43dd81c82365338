//! Name value object shared by lists and todos.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Shortest accepted name, in characters.
pub const MIN_NAME_LENGTH: usize = 1;

/// Longest accepted name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A trimmed name of 1-100 characters.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Trims surrounding whitespace and checks the length.
    ///
    /// `field` names the input in the error message ("list name", "todo name").
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(ValidationError::length_out_of_range(
                field,
                MIN_NAME_LENGTH,
                MAX_NAME_LENGTH,
                length,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
