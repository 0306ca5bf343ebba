//! Card identifier presented by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The card identifier attached to a payment request.
///
/// Construction never validates: whether an identifier is acceptable is a
/// per-family decision made by that family's `CardValidator`. Malformed
/// input is simply invalid to a validator, never an error.
///
/// `Display` and `Debug` mask all but the last four characters so the PAN
/// never leaks into audit lines or traces.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw identifier, for validation and processing only.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_char_boundary(self.0.len().saturating_sub(4)) && self.0.len() > 4 {
            write!(f, "****{}", &self.0[self.0.len() - 4..])
        } else {
            write!(f, "****")
        }
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_masks_all_but_last_four() {
        let card = CardNumber::new("1234567890123456");
        assert_eq!(format!("{}", card), "****3456");
    }

    #[test]
    fn test_short_identifiers_are_fully_masked() {
        let card = CardNumber::new("123");
        assert_eq!(format!("{}", card), "****");
    }

    #[test]
    fn test_debug_is_masked_too() {
        let card = CardNumber::new("5234567890123456");
        assert_eq!(format!("{:?}", card), "CardNumber(****3456)");
    }
}
