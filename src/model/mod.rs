//! Implements the crack bridge model and the search for the next crack

mod crack_bridge;
mod crack_initiation;
mod crack_selector;
pub use crate::model::crack_bridge::*;
pub use crate::model::crack_initiation::*;
pub use crate::model::crack_selector::*;
