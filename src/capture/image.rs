//! Context image type for loaded scan imagery

use std::path::Path;

use anyhow::Context;
use image::Rgba32FImage;

use crate::domain::{ChannelRaster, ChannelSet, RasterGeometry};

/// A co-registered context image with its channels split out
///
/// Samples are normalised to `0.0..=1.0` whatever the source bit depth.
#[derive(Clone, Debug)]
pub struct ContextImage {
    pub name: String,
    pub geometry: RasterGeometry,
    pub channels: ChannelSet,
}

impl ContextImage {
    /// Open an image file placed at `offset` in draw space
    pub fn open(name: impl Into<String>, path: &Path, offset: (i32, i32)) -> anyhow::Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("Failed to open context image {}", path.display()))?;
        Self::from_rgba(name, &img.to_rgba32f(), offset)
    }

    pub fn from_rgba(
        name: impl Into<String>,
        rgba: &Rgba32FImage,
        offset: (i32, i32),
    ) -> anyhow::Result<Self> {
        let name = name.into();
        let geometry = RasterGeometry::new(rgba.width(), rgba.height())
            .ok_or_else(|| anyhow::anyhow!("Context image '{}' is empty", name))?
            .with_offset(offset.0, offset.1);
        let channels = ChannelSet::from_rgba(rgba, geometry);
        log::debug!(
            "ContextImage '{}' loaded: {}x{} pixels at ({}, {})",
            name,
            geometry.width(),
            geometry.height(),
            offset.0,
            offset.1
        );
        Ok(Self {
            name,
            geometry,
            channels,
        })
    }

    /// Attach a single-band image file as an extra channel
    ///
    /// The file must have the same dimensions as the context image.
    pub fn add_channel_file(&mut self, name: &str, path: &Path) -> anyhow::Result<()> {
        let img = image::open(path)
            .with_context(|| format!("Failed to open channel image {}", path.display()))?;
        let luma = img.to_luma32f();
        let geometry = RasterGeometry::new(luma.width(), luma.height())
            .ok_or_else(|| anyhow::anyhow!("Channel image {} is empty", path.display()))?;
        self.channels
            .insert(ChannelRaster::new(name, geometry, luma.into_raw()))
            .with_context(|| format!("Cannot add channel from {}", path.display()))
    }

    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    pub fn height(&self) -> u32 {
        self.geometry.height()
    }
}

impl ChannelSet {
    /// Split a colour image into `R`, `G` and `B` channels
    pub fn from_rgba(rgba: &Rgba32FImage, geometry: RasterGeometry) -> Self {
        let mut bands: [Vec<f32>; 3] = Default::default();
        for pixel in rgba.pixels() {
            for (band, value) in bands.iter_mut().zip(pixel.0) {
                band.push(value);
            }
        }
        let [r, g, b] = bands;
        Self::with_channels(
            geometry,
            [
                ChannelRaster::new("R", geometry, r),
                ChannelRaster::new("G", geometry, g),
                ChannelRaster::new("B", geometry, b),
            ],
        )
    }
}
