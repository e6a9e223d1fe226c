//! Implements the base structures for a cracking simulation

mod constants;
mod control;
mod param_discretization;
mod param_material;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::param_discretization::*;
pub use crate::base::param_material::*;
