//! Square pixel neighbourhoods clipped to the raster

use crate::domain::{PixelIndex, Point, RasterGeometry, Rect};

use super::coords;

/// Pixels within `radius` cells of `center` along both axes
///
/// The window is clipped to the raster, so every returned index is below
/// `raster.pixel_count()`. Each pixel comes with its draw-space point.
/// A negative radius, or a window entirely outside the raster, yields
/// nothing.
pub fn neighborhood(
    center: PixelIndex,
    raster: &RasterGeometry,
    radius: i32,
) -> Vec<(PixelIndex, Point)> {
    if radius < 0 {
        return Vec::new();
    }

    // Rows further than `radius` below the raster cannot reach it
    let row = center / raster.width() as usize;
    if row > raster.height() as usize - 1 + radius as usize {
        return Vec::new();
    }

    let (cx, cy) = coords::index_to_cell(center, raster);
    let Some(window) = Rect::around(cx, cy, radius as i64).intersect(raster.local_bounds()) else {
        return Vec::new();
    };

    let width = raster.width() as i64;
    let mut result = Vec::with_capacity((window.width() * window.height()) as usize);
    for y in window.top..window.bottom {
        for x in window.left..window.right {
            let idx = (y * width + x) as PixelIndex;
            result.push((idx, coords::cell_to_point(x, y, raster)));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(cells: &[(PixelIndex, Point)]) -> Vec<PixelIndex> {
        cells.iter().map(|(idx, _)| *idx).collect()
    }

    #[test]
    fn test_radius_zero_is_center() {
        let raster = RasterGeometry::new(4, 4).unwrap();
        for idx in 0..16 {
            assert_eq!(indices(&neighborhood(idx, &raster, 0)), vec![idx]);
        }
    }

    #[test]
    fn test_clipped_at_corner() {
        let raster = RasterGeometry::new(4, 4).unwrap();
        assert_eq!(indices(&neighborhood(0, &raster, 1)), vec![0, 1, 4, 5]);
        assert_eq!(indices(&neighborhood(15, &raster, 1)), vec![10, 11, 14, 15]);
    }

    #[test]
    fn test_interior_window() {
        let raster = RasterGeometry::new(5, 5).unwrap();
        let cells = neighborhood(12, &raster, 1);
        assert_eq!(indices(&cells), vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_points_carry_offset() {
        let raster = RasterGeometry::new(4, 4).unwrap().with_offset(10, 20);
        let cells = neighborhood(5, &raster, 0);
        assert_eq!(cells, vec![(5, Point::new(11.0, 21.0))]);
    }

    #[test]
    fn test_negative_radius_is_empty() {
        let raster = RasterGeometry::new(4, 4).unwrap();
        assert!(neighborhood(5, &raster, -1).is_empty());
    }

    #[test]
    fn test_large_radius_stays_in_bounds() {
        let raster = RasterGeometry::new(3, 2).unwrap();
        let cells = neighborhood(4, &raster, 50);
        assert_eq!(indices(&cells), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_center_past_raster() {
        let raster = RasterGeometry::new(4, 4).unwrap();
        assert!(neighborhood(40, &raster, 1).is_empty());
        // Row 4 is one past the end; radius 1 reaches back into row 3
        assert_eq!(indices(&neighborhood(17, &raster, 1)), vec![12, 13, 14]);
    }

    #[test]
    fn test_huge_center_index() {
        let column = RasterGeometry::new(1, 4).unwrap();
        assert!(neighborhood(i64::MAX as usize, &column, 1).is_empty());
        assert!(neighborhood(usize::MAX, &column, 1).is_empty());
        assert!(neighborhood(usize::MAX, &column, i32::MAX).is_empty());
        assert_eq!(indices(&neighborhood(3, &column, i32::MAX)), vec![0, 1, 2, 3]);
    }
}
