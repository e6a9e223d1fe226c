use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Defines the phase of the specimen at a recorded event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrackingPhase {
    /// No crack yet (initial zero state)
    Uncracked,

    /// One or more cracks below the ultimate composite strength
    Cracking,

    /// No further crack can form; the composite is loaded up to its ultimate strength
    Saturated,
}

/// Holds the result of a cracking simulation
///
/// The load-related sequences have one entry for the initial (zero) state, one entry per
/// crack, and one entry for the ultimate (saturated) state. Thus, their length is `n_cracks + 2`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrackingHistory {
    /// Positions of the material points
    ///
    /// (n_x)
    pub x: Vector,

    /// Matrix strength at the material points
    ///
    /// (n_x)
    pub sig_mu_x: Vector,

    /// Crack positions in order of discovery
    ///
    /// (n_cracks)
    pub crack_positions: Vec<f64>,

    /// Composite stress at each event (non-decreasing; the last entry is σcu)
    ///
    /// (n_cracks + 2)
    pub sig_c: Vec<f64>,

    /// Composite strain at each event
    ///
    /// (n_cracks + 2)
    pub eps_c: Vec<f64>,

    /// Average crack spacing at each event
    ///
    /// (n_cracks + 2)
    pub spacing: Vec<f64>,

    /// Matrix stress field at each event
    ///
    /// Entry k is computed under the load `sig_c[k]` with the first k cracks (all cracks for the last entry).
    ///
    /// (n_cracks + 2) × (n_x)
    pub sig_m_x: Vec<Vector>,
}

/// Holds a view of one recorded event of the cracking history
#[derive(Clone, Copy, Debug)]
pub struct CrackingState<'a> {
    /// Index of the event in the history
    pub index: usize,

    /// Phase of the specimen
    pub phase: CrackingPhase,

    /// Composite stress
    pub sig_c: f64,

    /// Composite strain
    pub eps_c: f64,

    /// Average crack spacing
    pub spacing: f64,

    /// Cracks present at this event (in order of discovery)
    pub cracks: &'a [f64],

    /// Matrix stress field
    pub sig_m_x: &'a Vector,
}

impl CrackingHistory {
    /// Returns the number of cracks
    pub fn n_cracks(&self) -> usize {
        self.crack_positions.len()
    }

    /// Returns the number of recorded events (n_cracks + 2)
    pub fn len(&self) -> usize {
        self.sig_c.len()
    }

    /// Returns the ultimate composite strength (the last recorded load)
    pub fn sig_cu(&self) -> f64 {
        self.sig_c.last().copied().unwrap_or(0.0)
    }

    /// Returns the phase of the event at a given index
    pub fn phase(&self, index: usize) -> Result<CrackingPhase, StrError> {
        let n = self.len();
        if index >= n {
            return Err("index of event is out of bounds");
        }
        if index == 0 {
            Ok(CrackingPhase::Uncracked)
        } else if index == n - 1 {
            Ok(CrackingPhase::Saturated)
        } else {
            Ok(CrackingPhase::Cracking)
        }
    }

    /// Returns a view of the event at a given index
    pub fn state(&self, index: usize) -> Result<CrackingState<'_>, StrError> {
        let phase = self.phase(index)?;
        let n_cracks = match phase {
            CrackingPhase::Saturated => self.n_cracks(),
            _ => index,
        };
        Ok(CrackingState {
            index,
            phase,
            sig_c: self.sig_c[index],
            eps_c: self.eps_c[index],
            spacing: self.spacing[index],
            cracks: &self.crack_positions[..n_cracks],
            sig_m_x: &self.sig_m_x[index],
        })
    }

    /// Returns the crack positions sorted along the specimen
    pub fn sorted_crack_positions(&self) -> Vec<f64> {
        let mut sorted = self.crack_positions.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// Returns a JSON representation of the history
    pub fn to_json_string(&self) -> Result<String, StrError> {
        serde_json::to_string(self).map_err(|_| "cannot serialize cracking history")
    }

    /// Allocates a new instance from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse cracking history")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
