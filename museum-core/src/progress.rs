//! Visit progress derivation.

use serde::{Deserialize, Serialize};

/// Progress through the exhibit: visited sections out of total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub visited: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage in `[0.0, 100.0]`. An empty exhibit reports `0.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.visited as f64 / self.total as f64) * 100.0
    }

    /// Percentage rounded to the nearest whole number for display.
    pub fn display_percent(&self) -> u8 {
        self.percent().round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.visited == self.total
    }
}
