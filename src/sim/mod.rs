//! Implements the specimen generator and the cracking history tracer

mod crack_tracer;
mod cracking_history;
mod specimen;
pub use crate::sim::crack_tracer::*;
pub use crate::sim::cracking_history::*;
pub use crate::sim::specimen::*;
