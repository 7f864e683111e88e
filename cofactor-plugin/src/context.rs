//! Evaluation Context

use cofactor_core::Tolerance;

/// Evaluation context passed to plugins
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    /// Tolerance used by element-wise comparisons
    pub tolerance: Tolerance,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}
