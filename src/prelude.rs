//! Makes available common structures needed to run a simulation
//!
//! You may write `use pmcm::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Control, ParamDiscretization, ParamMaterial, DEFAULT_TEST_DIR};
pub use crate::model::{CrackBridge, CrackLoad};
pub use crate::sim::{run_cracking_simulation, CrackTracer, CrackingHistory, CrackingPhase, Specimen};
pub use crate::StrError;
