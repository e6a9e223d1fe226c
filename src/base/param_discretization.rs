use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the discretization of the specimen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamDiscretization {
    /// Number of material points (at least 2)
    pub n_x: usize,

    /// Length of the specimen
    pub l_x: f64,
}

impl ParamDiscretization {
    /// Returns the reference discretization
    pub fn sample() -> Self {
        ParamDiscretization { n_x: 5000, l_x: 500.0 }
    }

    /// Validates all data
    ///
    /// A single material point has no integration length and is rejected.
    pub fn validate(&self) -> Result<(), StrError> {
        if self.n_x < 2 {
            return Err("n_x must be ≥ 2");
        }
        if !self.l_x.is_finite() || self.l_x <= 0.0 {
            return Err("l_x must be finite and > 0.0");
        }
        Ok(())
    }

    /// Returns the distance between two consecutive material points
    #[inline]
    pub fn dx(&self) -> f64 {
        self.l_x / ((self.n_x - 1) as f64)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
