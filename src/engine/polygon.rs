//! Point-in-polygon test by ray casting

use crate::domain::Point;

/// Whether `point` lies inside the closed polygon `vertices`
///
/// A horizontal ray is cast towards +x and each edge it crosses toggles the
/// result. An edge counts when exactly one endpoint is strictly above
/// `point.y` and the crossing is strictly right of `point.x`. Points on an
/// edge fall on whichever side those strict comparisons put them: the left
/// and top edges of a shape tend to be inside, right and bottom outside.
/// Polygons with fewer than three vertices contain nothing.
pub fn contains(vertices: &[Point], point: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let cross_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_square() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(contains(&square, Point::new(2.0, 2.0)));
        assert!(!contains(&square, Point::new(5.0, 2.0)));
        assert!(!contains(&square, Point::new(-1.0, 2.0)));
        assert!(!contains(&square, Point::new(2.0, 4.5)));
    }

    #[test]
    fn test_concave() {
        // U shape open at the top between x=1..3
        let u = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 3.0),
            (3.0, 3.0),
            (3.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ]);
        assert!(contains(&u, Point::new(0.5, 1.0)));
        assert!(!contains(&u, Point::new(2.0, 1.0)));
        assert!(contains(&u, Point::new(2.0, 3.5)));
    }

    #[test]
    fn test_triangle_boundary_tie_break() {
        let tri = pts(&[(1.0, 1.0), (3.0, 1.0), (1.0, 3.0)]);
        assert!(contains(&tri, Point::new(1.0, 1.0)));
        assert!(contains(&tri, Point::new(2.0, 1.0)));
        assert!(!contains(&tri, Point::new(3.0, 1.0)));
        assert!(!contains(&tri, Point::new(2.0, 2.0)));
        assert!(!contains(&tri, Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate() {
        assert!(!contains(&[], Point::new(0.0, 0.0)));
        let line = pts(&[(0.0, 0.0), (4.0, 4.0)]);
        assert!(!contains(&line, Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_repeated_vertices_do_not_panic() {
        let flat = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert!(!contains(&flat, Point::new(1.0, 1.0)));
    }
}
