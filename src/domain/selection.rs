//! Selection types for scan locations and raster pixels
//!
//! All selections are values. Operations that change a selection return a
//! new one and leave the input untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::geometry::{PixelIndex, Point, RasterGeometry};

/// Index of a scan location (PMC) within its dataset
pub type LocationIndex = u32;

/// Closed footprint of a scan location in image draw space
///
/// The last point implicitly connects back to the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationPolygon {
    pub location: LocationIndex,
    pub points: Vec<Point>,
}

impl LocationPolygon {
    pub fn new(location: LocationIndex, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            location,
            points: points.into_iter().collect(),
        }
    }

    /// Fewer than three points enclose no area
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

/// Selected scan locations of one dataset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamSelection {
    pub dataset_id: String,
    pub locations: BTreeSet<LocationIndex>,
}

impl BeamSelection {
    pub fn new(
        dataset_id: impl Into<String>,
        locations: impl IntoIterator<Item = LocationIndex>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            locations: locations.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Selected pixels of a named raster
///
/// Every index is below `raster.pixel_count()`. Construction drops any
/// index that is not, including when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PixelSelectionRepr")]
pub struct PixelSelection {
    pixels: BTreeSet<PixelIndex>,
    raster: RasterGeometry,
    image_name: String,
}

#[derive(Deserialize)]
struct PixelSelectionRepr {
    pixels: Vec<PixelIndex>,
    raster: RasterGeometry,
    #[serde(default)]
    image_name: String,
}

impl From<PixelSelectionRepr> for PixelSelection {
    fn from(repr: PixelSelectionRepr) -> Self {
        Self::new(repr.pixels, repr.raster, repr.image_name)
    }
}

impl PixelSelection {
    pub fn new(
        pixels: impl IntoIterator<Item = PixelIndex>,
        raster: RasterGeometry,
        image_name: impl Into<String>,
    ) -> Self {
        let limit = raster.pixel_count();
        let mut dropped = 0usize;
        let pixels = pixels
            .into_iter()
            .filter(|&idx| {
                let keep = idx < limit;
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        if dropped > 0 {
            log::debug!("Dropped {} pixel indices outside a {} pixel raster", dropped, limit);
        }
        Self {
            pixels,
            raster,
            image_name: image_name.into(),
        }
    }

    /// Nothing selected
    pub fn empty(raster: RasterGeometry, image_name: impl Into<String>) -> Self {
        Self {
            pixels: BTreeSet::new(),
            raster,
            image_name: image_name.into(),
        }
    }

    pub fn pixels(&self) -> &BTreeSet<PixelIndex> {
        &self.pixels
    }

    pub fn raster(&self) -> &RasterGeometry {
        &self.raster
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, idx: PixelIndex) -> bool {
        self.pixels.contains(&idx)
    }

    /// Union with another selection, keeping this selection's raster and name
    pub fn union(&self, other: &PixelSelection) -> PixelSelection {
        PixelSelection::new(
            self.pixels.iter().chain(other.pixels.iter()).copied(),
            self.raster,
            self.image_name.clone(),
        )
    }
}

/// Beam and pixel selection held together by a selection host
///
/// `version` increases by one for every state derived from another, which
/// lets a host detect stale results and keep an undo history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub beam: BeamSelection,
    pub pixels: Option<PixelSelection>,
    pub version: u64,
}

impl SelectionState {
    pub fn new(beam: BeamSelection, pixels: Option<PixelSelection>) -> Self {
        Self {
            beam,
            pixels,
            version: 0,
        }
    }

    /// New state with the pixel selection replaced
    pub fn with_pixels(&self, pixels: Option<PixelSelection>) -> Self {
        Self {
            beam: self.beam.clone(),
            pixels,
            version: self.version + 1,
        }
    }

    /// New state with the beam selection replaced
    pub fn with_beam(&self, beam: BeamSelection) -> Self {
        Self {
            beam,
            pixels: self.pixels.clone(),
            version: self.version + 1,
        }
    }
}
