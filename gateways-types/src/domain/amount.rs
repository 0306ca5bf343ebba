//! Non-negative monetary amount in minor units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A payment amount in the smallest currency unit (cents).
///
/// Stored as an integer to avoid floating-point precision issues.
/// Amounts are validated at construction: a negative value is a
/// `DomainError`, zero is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    minor: i64,
}

impl Amount {
    /// Creates a new Amount from minor units.
    pub fn new(minor: i64) -> Result<Self, DomainError> {
        if minor < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { minor })
    }

    /// Creates an Amount from whole major units (e.g. 150 -> 150.00).
    pub fn from_major(major: i64) -> Result<Self, DomainError> {
        Self::new(major.saturating_mul(100))
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self { minor: 0 }
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.minor
    }

    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.minor / 100;
        let minor = (self.minor % 100).abs();
        write!(f, "{}.{:02}", major, minor)
    }
}
