//! Probabilistic multiple cracking model (PMCM)
//!
//! Traces the progressive cracking of a brittle matrix reinforced with continuous fibers
//! under a monotonically increasing tensile load. The matrix strength is a random (Weibull)
//! field; the stress transfer around each crack follows a constant-bond shear-lag crack bridge.
//!
//! The result of a simulation is a [sim::CrackingHistory] with the crack positions, the
//! composite stress and strain at each cracking event, the crack spacing evolution, and the
//! matrix stress fields.
//!
//! ```no_run
//! use pmcm::prelude::*;
//!
//! fn main() -> Result<(), StrError> {
//!     let param = ParamMaterial::sample();
//!     let disc = ParamDiscretization { n_x: 500, l_x: 500.0 };
//!     let history = run_cracking_simulation(&param, &disc, None)?;
//!     println!("number of cracks = {}", history.n_cracks());
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod model;
pub mod prelude;
pub mod sim;
pub mod util;
