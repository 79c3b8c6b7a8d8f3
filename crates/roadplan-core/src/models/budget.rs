//! Road budget value.

use crate::error::{Error, Result};

/// Planned spend for a road (billions of Frw). Always finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Budget(f64);

impl Budget {
    /// Validate a raw amount.
    pub fn new(amount: f64) -> Result<Self> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self(amount))
        } else {
            Err(Error::InvalidBudget(amount))
        }
    }

    /// Raw amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}
