//! Implements numerical utilities

mod crack_spacing;
mod integration;
pub use crate::util::crack_spacing::*;
pub use crate::util::integration::*;
