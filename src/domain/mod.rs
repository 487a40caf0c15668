//! Pure domain types with minimal dependencies
//!
//! This module contains the value types the selection engine consumes and
//! produces. Types here do no I/O and hold no references to loaded images,
//! so they can be cloned, compared and serialized freely.

pub mod channel;
pub mod geometry;
pub mod selection;

pub use channel::*;
pub use geometry::*;
pub use selection::*;
