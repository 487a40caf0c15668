//! Location footprint to raster pixel conversion

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{LocationPolygon, PixelIndex, RasterGeometry};

use super::{coords, neighborhood, polygon};

/// Default dilation around each footprint vertex, in pixels
pub const DEFAULT_OVERSIZE_RADIUS: i32 = 2;

/// How a footprint is turned into pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterizeOptions {
    /// Neighbourhood radius sampled around every vertex
    pub oversize_radius: i32,
    /// Keep every sampled pixel instead of only those inside the footprint
    pub include_oversized: bool,
}

impl Default for RasterizeOptions {
    fn default() -> Self {
        Self {
            oversize_radius: DEFAULT_OVERSIZE_RADIUS,
            include_oversized: false,
        }
    }
}

/// Pixels covered by a footprint
///
/// Only the neighbourhoods of the footprint's own vertices are sampled, so
/// the cost follows the vertex count rather than the raster size. Vertices
/// that do not map to a valid pixel are skipped.
pub fn rasterize(
    footprint: &LocationPolygon,
    raster: &RasterGeometry,
    options: RasterizeOptions,
) -> BTreeSet<PixelIndex> {
    let mut pixels = BTreeSet::new();
    for vertex in &footprint.points {
        let Some(center) = coords::point_to_index(*vertex, raster) else {
            log::trace!(
                "Location {}: vertex ({}, {}) is off the raster",
                footprint.location,
                vertex.x,
                vertex.y
            );
            continue;
        };

        for (idx, point) in neighborhood::neighborhood(center, raster, options.oversize_radius) {
            if pixels.contains(&idx) {
                continue;
            }
            if options.include_oversized || polygon::contains(&footprint.points, point) {
                pixels.insert(idx);
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn triangle() -> LocationPolygon {
        LocationPolygon::new(
            7,
            [
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(1.0, 3.0),
            ],
        )
    }

    fn raster() -> RasterGeometry {
        RasterGeometry::new(4, 4).unwrap()
    }

    #[test]
    fn test_triangle_exact() {
        let options = RasterizeOptions {
            oversize_radius: 1,
            include_oversized: false,
        };
        let pixels = rasterize(&triangle(), &raster(), options);
        assert!(pixels.contains(&5));
        assert!(!pixels.contains(&15));
        assert_eq!(pixels.into_iter().collect::<Vec<_>>(), vec![5, 6, 9]);
    }

    #[test]
    fn test_triangle_oversized() {
        let options = RasterizeOptions {
            oversize_radius: 1,
            include_oversized: true,
        };
        let pixels = rasterize(&triangle(), &raster(), options);
        assert_eq!(pixels.into_iter().collect::<Vec<_>>(), (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_oversized_is_superset() {
        let raster = RasterGeometry::new(12, 9).unwrap().with_offset(2, -1);
        let footprint = LocationPolygon::new(
            3,
            [
                Point::new(4.2, 1.1),
                Point::new(9.7, 2.4),
                Point::new(8.1, 6.9),
                Point::new(3.3, 5.5),
            ],
        );
        for radius in 0..4 {
            let exact = rasterize(
                &footprint,
                &raster,
                RasterizeOptions {
                    oversize_radius: radius,
                    include_oversized: false,
                },
            );
            let oversized = rasterize(
                &footprint,
                &raster,
                RasterizeOptions {
                    oversize_radius: radius,
                    include_oversized: true,
                },
            );
            assert!(exact.is_subset(&oversized));
        }
    }

    #[test]
    fn test_off_raster_vertices_skipped() {
        let footprint = LocationPolygon::new(
            1,
            [
                Point::new(0.0, 0.0),
                Point::new(-20.0, -20.0),
                Point::new(2.0, 2.0),
            ],
        );
        let options = RasterizeOptions {
            oversize_radius: 0,
            include_oversized: true,
        };
        let pixels = rasterize(&footprint, &raster(), options);
        // (0, 0) maps to the reserved index 0, (-20, -20) is off the raster
        assert_eq!(pixels.into_iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_degenerate_footprint() {
        let footprint = LocationPolygon::new(1, [Point::new(1.0, 1.0), Point::new(2.0, 1.0)]);
        assert!(rasterize(&footprint, &raster(), RasterizeOptions::default()).is_empty());
        assert!(rasterize(&LocationPolygon::new(2, []), &raster(), RasterizeOptions::default()).is_empty());
    }

    #[test]
    fn test_negative_radius_selects_nothing() {
        let options = RasterizeOptions {
            oversize_radius: -1,
            include_oversized: true,
        };
        assert!(rasterize(&triangle(), &raster(), options).is_empty());
    }
}
