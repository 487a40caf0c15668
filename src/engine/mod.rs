//! Selection and region geometry engine
//!
//! This module contains:
//! - Point/index mapping between draw space and raster pixels
//! - Ray-casting containment and clipped pixel neighbourhoods
//! - Footprint rasterization and beam/pixel selection merging
//! - Channel ratio summaries over pixel selections
//!
//! Everything here is synchronous and pure. Raster geometry, footprints and
//! channel samples are borrowed for the duration of a call and new
//! selections are returned by value.

pub mod coords;
pub mod merge;
pub mod neighborhood;
pub mod polygon;
pub mod rasterize;
pub mod ratio;

pub use merge::{FootprintMap, FootprintSource, SelectionMerger};
pub use rasterize::{RasterizeOptions, rasterize};
pub use ratio::{ChannelRatio, RatioAnalyzer};
