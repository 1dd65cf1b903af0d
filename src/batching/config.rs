//! Printer capacity limits.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity limits applied to every batch.
///
/// # Examples
///
/// ```
/// use u_batchcut::batching::Constraints;
///
/// let constraints = Constraints::new(300.0, 2).with_max_items(4);
/// assert_eq!(constraints.max_items, 4);
/// assert!(constraints.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    /// Maximum accumulated volume of one batch.
    pub max_volume: f64,
    /// Maximum number of jobs in one batch.
    pub max_items: usize,
}

impl Constraints {
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    pub fn with_max_volume(mut self, max_volume: f64) -> Self {
        self.max_volume = max_volume;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Validates the limits.
    pub fn validate(&self) -> Result<()> {
        if !self.max_volume.is_finite() || self.max_volume <= 0.0 {
            return Err(Error::invalid(
                "max_volume",
                format!(
                    "max_volume must be positive and finite, got {}",
                    self.max_volume
                ),
            ));
        }
        if self.max_items == 0 {
            return Err(Error::invalid("max_items", "max_items must be at least 1"));
        }
        Ok(())
    }
}
