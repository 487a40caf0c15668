//! Scene files: a dataset's footprints plus its context image
//!
//! A scene is the JSON a selection host hands to the command-line tool.
//! Image paths are resolved relative to the scene file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::capture::image::ContextImage;
use crate::domain::{ChannelSet, LocationPolygon, RasterGeometry};
use crate::engine::FootprintMap;

#[derive(Debug, Deserialize)]
struct SceneFile {
    dataset_id: String,
    #[serde(default)]
    footprints: Vec<LocationPolygon>,
    #[serde(default)]
    context_image: Option<ContextImageEntry>,
    /// Bare geometry for scenes without image data
    #[serde(default)]
    raster: Option<RasterGeometry>,
}

#[derive(Debug, Deserialize)]
struct ContextImageEntry {
    name: String,
    path: PathBuf,
    #[serde(default)]
    offset_x: i32,
    #[serde(default)]
    offset_y: i32,
    #[serde(default)]
    channels: Vec<ChannelEntry>,
}

#[derive(Debug, Deserialize)]
struct ChannelEntry {
    name: String,
    path: PathBuf,
}

/// Loaded scene
#[derive(Debug)]
pub struct Scene {
    pub footprints: FootprintMap,
    pub context: Option<ContextImage>,
    raster: Option<RasterGeometry>,
}

impl Scene {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        let file: SceneFile = serde_json::from_str(&text)
            .with_context(|| format!("Invalid scene {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_file(file, base)
    }

    fn from_file(file: SceneFile, base: &Path) -> anyhow::Result<Self> {
        let mut footprints = FootprintMap::new(file.dataset_id);
        for footprint in file.footprints {
            if footprint.is_degenerate() {
                log::warn!(
                    "Location {} has a footprint of {} points",
                    footprint.location,
                    footprint.points.len()
                );
            }
            footprints.insert(footprint);
        }

        let context = match file.context_image {
            Some(entry) => {
                let mut ctx = ContextImage::open(
                    entry.name,
                    &base.join(&entry.path),
                    (entry.offset_x, entry.offset_y),
                )?;
                for channel in entry.channels {
                    ctx.add_channel_file(&channel.name, &base.join(&channel.path))?;
                }
                Some(ctx)
            }
            None => None,
        };

        if let (Some(ctx), Some(raster)) = (&context, &file.raster) {
            if ctx.geometry != *raster {
                log::warn!(
                    "Scene raster {:?} ignored, context image '{}' is {:?}",
                    raster,
                    ctx.name,
                    ctx.geometry
                );
            }
        }

        Ok(Self {
            footprints,
            context,
            raster: file.raster,
        })
    }

    /// Raster to select on: the context image's, else the bare geometry
    pub fn raster(&self) -> Option<&RasterGeometry> {
        self.context
            .as_ref()
            .map(|ctx| &ctx.geometry)
            .or(self.raster.as_ref())
    }

    pub fn image_name(&self) -> Option<&str> {
        self.context.as_ref().map(|ctx| ctx.name.as_str())
    }

    pub fn channels(&self) -> Option<&ChannelSet> {
        self.context.as_ref().map(|ctx| &ctx.channels)
    }
}
