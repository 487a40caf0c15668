//! Geometric types for rasters, pixel windows and draw-space coordinates

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Linear pixel index, `row * width + col` in raster-local space
pub type PixelIndex = usize;

/// A point in image draw space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle in raster-local pixel units, right and bottom exclusive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    /// Create a new rectangle from coordinates
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `2 * radius + 1` centered on a cell, saturating at the `i64` range
    pub fn around(x: i64, y: i64, radius: i64) -> Self {
        let reach = radius.saturating_add(1);
        Self::new(
            x.saturating_sub(radius),
            y.saturating_sub(radius),
            x.saturating_add(reach),
            y.saturating_add(reach),
        )
    }

    /// Calculate the intersection of two rectangles
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Rect {
                left,
                top,
                right,
                bottom,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

/// Dimensions and draw offset of a raster co-registered with scan locations
///
/// The offset translates raster-local pixel coordinates into the shared
/// image draw space that location footprints are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterGeometry {
    width: NonZeroU32,
    height: NonZeroU32,
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
}

impl RasterGeometry {
    /// Returns `None` when either dimension is zero
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
            offset_x: 0,
            offset_y: 0,
        })
    }

    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Total number of pixels, the exclusive upper bound of a `PixelIndex`
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Raster extent in local coordinates
    pub fn local_bounds(&self) -> Rect {
        Rect::new(0, 0, self.width() as i64, self.height() as i64)
    }

    /// Same pixel grid, ignoring the draw offset
    pub fn same_dimensions(&self, other: &RasterGeometry) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(-2, -2, 3, 3);
        let b = Rect::new(0, 0, 4, 4);
        assert_eq!(a.intersect(b), Some(Rect::new(0, 0, 3, 3)));
        assert_eq!(Rect::new(5, 5, 6, 6).intersect(b), None);
    }

    #[test]
    fn test_rect_around() {
        let r = Rect::around(1, 1, 1);
        assert_eq!(r, Rect::new(0, 0, 3, 3));
        assert_eq!((r.width(), r.height()), (3, 3));
    }

    #[test]
    fn test_rect_around_saturates() {
        let r = Rect::around(0, i64::MAX, 1);
        assert_eq!((r.top, r.bottom), (i64::MAX - 1, i64::MAX));
        let r = Rect::around(i64::MIN, 0, i64::MAX);
        assert_eq!((r.left, r.right), (i64::MIN, -1));
    }

    #[test]
    fn test_raster_geometry_rejects_zero_dimensions() {
        assert!(RasterGeometry::new(0, 4).is_none());
        assert!(RasterGeometry::new(4, 0).is_none());
        let raster = RasterGeometry::new(4, 3).unwrap();
        assert_eq!(raster.pixel_count(), 12);
    }

    #[test]
    fn test_raster_geometry_deserialize_defaults_offset() {
        let raster: RasterGeometry = serde_json::from_str(r#"{"width":8,"height":2}"#).unwrap();
        assert_eq!(raster.offset_x, 0);
        assert_eq!(raster.offset_y, 0);
        assert!(serde_json::from_str::<RasterGeometry>(r#"{"width":0,"height":2}"#).is_err());
    }

    #[test]
    fn test_same_dimensions_ignores_offset() {
        let a = RasterGeometry::new(4, 4).unwrap();
        let b = a.with_offset(10, -3);
        assert!(a.same_dimensions(&b));
        assert_ne!(a, b);
    }
}
