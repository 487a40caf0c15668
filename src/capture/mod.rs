//! Context image loading and selection export
//!
//! This module consolidates:
//! - Context image type and channel extraction (image.rs)
//! - Pixel selection masks (mask.rs)

pub mod image;
pub mod mask;
