//! Geometric primitives

use std::f64::consts::PI;

/// A point in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// An axis-aligned rectangle in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x.saturating_add(self.width)
            && point.y >= self.y
            && point.y < self.y.saturating_add(self.height)
    }

    /// Intersection of two rectangles, `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x as i64 + self.width as i64).min(other.x as i64 + other.width as i64);
        let y1 = (self.y as i64 + self.height as i64).min(other.y as i64 + other.height as i64);
        if x1 <= x0 as i64 || y1 <= y0 as i64 {
            return None;
        }
        Some(Rect::new(x0, y0, (x1 - x0 as i64) as i32, (y1 - y0 as i64) as i32))
    }
}

/// Vertices of the hexagon centered on `(cx, cy)` with circumradius `radius`.
///
/// Vertex `i` sits at angle `i * 60°`, so the first vertex is on the right
/// and the hexagon has flat top and bottom edges. Coordinates are truncated
/// toward zero.
pub fn hexagon_vertices(cx: i32, cy: i32, radius: i32) -> [Point; 6] {
    let mut vertices = [Point::default(); 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = i as f64 * 2.0 * PI / 6.0;
        *vertex = Point::new(
            (cx as f64 + radius as f64 * angle.cos()) as i32,
            (cy as f64 + radius as f64 * angle.sin()) as i32,
        );
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(Point::new(2, 3)));
        assert!(rect.contains(Point::new(5, 7)));
        assert!(!rect.contains(Point::new(6, 3)));
        assert!(!rect.contains(Point::new(2, 8)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 0, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 3, 3)), None);
    }

    #[test]
    fn test_hexagon_vertices() {
        let v = hexagon_vertices(100, 100, 10);
        assert_eq!(v[0], Point::new(110, 100));
        // cos(60°) * 10 = 5.000000000000001, sin(60°) * 10 = 8.66
        assert_eq!(v[1], Point::new(105, 108));
        assert_eq!(v[2], Point::new(95, 108));
        assert_eq!(v[3], Point::new(90, 100));
        assert_eq!(v[4], Point::new(95, 91));
        assert_eq!(v[5], Point::new(105, 91));
    }

    #[test]
    fn test_hexagon_zero_radius_collapses() {
        let v = hexagon_vertices(7, 9, 0);
        assert!(v.iter().all(|p| *p == Point::new(7, 9)));
    }
}
