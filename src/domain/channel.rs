//! Named sample planes of a co-registered context image

use super::geometry::{PixelIndex, RasterGeometry};

/// One band of a context image (e.g. near-IR, green, blue, UV)
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelRaster {
    pub name: String,
    pub geometry: RasterGeometry,
    samples: Vec<f32>,
}

impl ChannelRaster {
    pub fn new(name: impl Into<String>, geometry: RasterGeometry, samples: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            geometry,
            samples,
        }
    }

    /// Sample at a pixel, `None` past the end of the stored samples
    pub fn sample(&self, idx: PixelIndex) -> Option<f32> {
        self.samples.get(idx).copied()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Ordered channels sharing one raster geometry
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSet {
    geometry: RasterGeometry,
    channels: Vec<ChannelRaster>,
}

impl ChannelSet {
    pub fn new(geometry: RasterGeometry) -> Self {
        Self {
            geometry,
            channels: Vec::new(),
        }
    }

    /// Build a set from channels, dropping any with other pixel dimensions
    pub fn with_channels(
        geometry: RasterGeometry,
        channels: impl IntoIterator<Item = ChannelRaster>,
    ) -> Self {
        let mut set = Self::new(geometry);
        for channel in channels {
            if let Err(err) = set.insert(channel) {
                log::warn!("{}", err);
            }
        }
        set
    }

    pub fn geometry(&self) -> &RasterGeometry {
        &self.geometry
    }

    /// Add a channel, replacing any channel with the same name
    ///
    /// Channels must have the set's pixel dimensions.
    pub fn insert(&mut self, channel: ChannelRaster) -> anyhow::Result<()> {
        if !channel.geometry.same_dimensions(&self.geometry) {
            return Err(anyhow::anyhow!(
                "Channel '{}' is {}x{}, expected {}x{}",
                channel.name,
                channel.geometry.width(),
                channel.geometry.height(),
                self.geometry.width(),
                self.geometry.height()
            ));
        }
        match self.channels.iter_mut().find(|c| c.name == channel.name) {
            Some(existing) => *existing = channel,
            None => self.channels.push(channel),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ChannelRaster> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelRaster> {
        self.channels.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
