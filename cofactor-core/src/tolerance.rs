//! Floating-point comparison tolerance

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default absolute tolerance for element comparison
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Absolute tolerance used when comparing matrices element by element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub epsilon: f64,
}

impl Tolerance {
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// False only when `|a - b| > epsilon`. A NaN difference (NaN operands,
    /// or infinities of the same sign) counts as a match.
    pub fn within(&self, a: f64, b: f64) -> bool {
        !matches!((a - b).abs().partial_cmp(&self.epsilon), Some(Ordering::Greater))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::new(DEFAULT_EPSILON)
    }
}
