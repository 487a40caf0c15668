//! Folding scan-location selections into pixel selections

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    BeamSelection, LocationIndex, LocationPolygon, PixelSelection, RasterGeometry, SelectionState,
};

use super::rasterize::{self, RasterizeOptions};

/// Supplies pre-computed location footprints for one dataset
pub trait FootprintSource {
    fn dataset_id(&self) -> &str;

    fn footprint(&self, location: LocationIndex) -> Option<&LocationPolygon>;

    fn footprints(&self) -> impl Iterator<Item = &LocationPolygon>;
}

/// In-memory footprints keyed by location index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FootprintMap {
    dataset_id: String,
    footprints: BTreeMap<LocationIndex, LocationPolygon>,
}

impl FootprintMap {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            footprints: BTreeMap::new(),
        }
    }

    /// Add a footprint, replacing any previous one for the same location
    pub fn insert(&mut self, footprint: LocationPolygon) {
        self.footprints.insert(footprint.location, footprint);
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}

impl FromIterator<LocationPolygon> for FootprintMap {
    fn from_iter<I: IntoIterator<Item = LocationPolygon>>(iter: I) -> Self {
        let mut map = FootprintMap::default();
        for footprint in iter {
            map.insert(footprint);
        }
        map
    }
}

impl FootprintSource for FootprintMap {
    fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    fn footprint(&self, location: LocationIndex) -> Option<&LocationPolygon> {
        self.footprints.get(&location)
    }

    fn footprints(&self) -> impl Iterator<Item = &LocationPolygon> {
        self.footprints.values()
    }
}

/// Converts between beam and pixel selections
///
/// The default merger rasterizes footprints with radius 2 and exact
/// containment. Other options are an explicit host choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionMerger {
    pub options: RasterizeOptions,
}

impl SelectionMerger {
    pub fn new(options: RasterizeOptions) -> Self {
        Self { options }
    }

    /// Union of every selected location's footprint pixels and the prior selection
    ///
    /// Prior pixels are always kept, apart from any that no longer fit the
    /// given raster. The image name is `image_name` if given, else the
    /// prior's, else empty. Returns `None` when there is no raster to
    /// select on.
    pub fn merge_locations_into_pixel_selection(
        &self,
        beam: &BeamSelection,
        footprints: &impl FootprintSource,
        raster: Option<&RasterGeometry>,
        prior: Option<&PixelSelection>,
        image_name: Option<&str>,
    ) -> Option<PixelSelection> {
        let Some(raster) = raster else {
            log::debug!("No context image raster, skipping merge of {} locations", beam.len());
            return None;
        };

        if beam.dataset_id != footprints.dataset_id() {
            log::warn!(
                "Beam selection is for dataset '{}' but footprints are from '{}'",
                beam.dataset_id,
                footprints.dataset_id()
            );
        }

        let mut pixels = BTreeSet::new();
        for &location in &beam.locations {
            match footprints.footprint(location) {
                Some(footprint) => {
                    pixels.extend(rasterize::rasterize(footprint, raster, self.options));
                }
                None => log::warn!("No footprint for selected location {}", location),
            }
        }
        let from_locations = pixels.len();

        if let Some(prior) = prior {
            pixels.extend(prior.pixels().iter().copied());
        }

        let name = image_name
            .or(prior.map(|p| p.image_name()))
            .unwrap_or_default()
            .to_string();

        let merged = PixelSelection::new(pixels, *raster, name);
        log::debug!(
            "Merged {} locations into {} pixels ({} from footprints) on '{}'",
            beam.len(),
            merged.len(),
            from_locations,
            merged.image_name()
        );
        Some(merged)
    }

    /// Merge a state's beam selection into its pixel selection
    ///
    /// The returned state carries the same beam selection and a bumped
    /// version.
    pub fn merge_into_state(
        &self,
        state: &SelectionState,
        footprints: &impl FootprintSource,
        raster: Option<&RasterGeometry>,
        image_name: Option<&str>,
    ) -> Option<SelectionState> {
        let pixels = self.merge_locations_into_pixel_selection(
            &state.beam,
            footprints,
            raster,
            state.pixels.as_ref(),
            image_name,
        )?;
        Some(state.with_pixels(Some(pixels)))
    }

    /// Locations whose footprint covers at least one selected pixel
    pub fn locations_for_pixels(
        &self,
        selection: &PixelSelection,
        footprints: &impl FootprintSource,
    ) -> BeamSelection {
        let mut beam = BeamSelection::new(footprints.dataset_id(), []);
        if selection.is_empty() {
            return beam;
        }

        for footprint in footprints.footprints() {
            let covered = rasterize::rasterize(footprint, selection.raster(), self.options);
            if covered.iter().any(|idx| selection.contains(*idx)) {
                beam.locations.insert(footprint.location);
            }
        }
        log::debug!(
            "{} pixels touch {} locations",
            selection.len(),
            beam.len()
        );
        beam
    }
}
