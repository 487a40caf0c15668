//! Conversion between draw-space points and linear pixel indices

use crate::domain::{PixelIndex, PixelSelection, Point, RasterGeometry};

/// Map a draw-space point to the pixel it falls on
///
/// Coordinates are rounded to the nearest cell and the draw offset removed.
/// Index 0 is rejected along with anything at or past `pixel_count()`, so the
/// top-left pixel never maps. Columns outside `[0, width)` are not rejected on
/// their own; they wrap onto a neighbouring row when the linear index is
/// still in range.
pub fn point_to_index(point: Point, raster: &RasterGeometry) -> Option<PixelIndex> {
    if !point.is_finite() {
        return None;
    }
    let raw_x = (point.x.round() as i64).checked_sub(raster.offset_x as i64)?;
    let raw_y = (point.y.round() as i64).checked_sub(raster.offset_y as i64)?;
    let idx = raw_y
        .checked_mul(raster.width() as i64)?
        .checked_add(raw_x)?;
    if idx <= 0 || idx >= raster.pixel_count() as i64 {
        return None;
    }
    Some(idx as PixelIndex)
}

/// Raster-local `(column, row)` of a pixel index
pub fn index_to_cell(idx: PixelIndex, raster: &RasterGeometry) -> (i64, i64) {
    let width = raster.width() as usize;
    ((idx % width) as i64, (idx / width) as i64)
}

/// Draw-space point of a pixel's cell
pub fn index_to_point(idx: PixelIndex, raster: &RasterGeometry) -> Point {
    let (x, y) = index_to_cell(idx, raster);
    cell_to_point(x, y, raster)
}

/// Draw-space position of every selected pixel, in index order
pub fn selection_points(selection: &PixelSelection) -> Vec<Point> {
    selection
        .pixels()
        .iter()
        .map(|&idx| index_to_point(idx, selection.raster()))
        .collect()
}

/// Draw-space point of a raster-local cell
pub fn cell_to_point(x: i64, y: i64, raster: &RasterGeometry) -> Point {
    Point::new(
        (x + raster.offset_x as i64) as f64,
        (y + raster.offset_y as i64) as f64,
    )
}
