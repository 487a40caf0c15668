//! Selection and region geometry for scan viewers
//!
//! Converts between selections of scan locations (each with a footprint
//! polygon in image space) and per-pixel selections of a co-registered
//! context image, and summarises channel ratios over selected pixels.

pub mod capture;
pub mod config;
pub mod domain;
pub mod engine;
pub mod scene;

pub use domain::*;
pub use engine::{
    ChannelRatio, FootprintMap, FootprintSource, RasterizeOptions, RatioAnalyzer, SelectionMerger,
};
