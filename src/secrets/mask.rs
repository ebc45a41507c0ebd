//! Display masking for the resolved password.

use serde::Serialize;
use std::fmt;

/// Character substituted for every hidden position.
pub const MASK_CHAR: char = '*';

/// Number of leading characters left visible.
pub const VISIBLE_PREFIX: usize = 2;

/// Keep the first two characters of `value` and replace the rest with `*`.
///
/// Works on characters, not bytes, so the output always has the same
/// character count as the input. Values of two characters or fewer are
/// returned unchanged.
pub fn mask(value: &str) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < VISIBLE_PREFIX { c } else { MASK_CHAR })
        .collect()
}

/// The masked display form of the resolved password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaskedSecret(String);

impl MaskedSecret {
    /// Mask `value` once and keep the result.
    pub fn from_value(value: &str) -> Self {
        Self(mask(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaskedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
