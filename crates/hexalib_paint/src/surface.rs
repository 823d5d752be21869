//! Software drawing surface
//!
//! An off-screen ARGB pixel buffer with the shape primitives of the paint API.
//! Shapes take a [`Brush`]: opaque brushes fill, outline brushes stroke a one
//! pixel contour. All drawing is clipped to the surface.

use crate::brush::Brush;
use crate::capture::CapturedFrame;
use crate::color::Color;
use crate::primitives::{hexagon_vertices, Point, Rect};

/// An off-screen ARGB (0xAARRGGBB) pixel buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surface bounds as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw pixels, row-major, packed as 0xAARRGGBB.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get a pixel, `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| Color::from_argb(self.pixels[idx]))
    }

    /// Set a pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.to_argb();
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Fill pixels `x0..=x1` of row `y`, clipped.
    fn fill_span(&mut self, y: i64, x0: i64, x1: i64, argb: u32) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i64 - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(argb);
    }

    /// Fill the whole surface with the color of the brush.
    pub fn clear(&mut self, brush: Brush) {
        self.pixels.fill(brush.color().to_argb());
    }

    /// Draw a one pixel line. Both endpoints are drawn.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Brush) {
        let argb = brush.color().to_argb();
        let bounds = self.bounds();
        if bounds.is_empty() {
            return;
        }
        let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
        if bounds.contains(p1) && bounds.contains(p2) {
            self.bresenham(p1, p2, argb);
        } else if let Some((p1, p2)) = clip_line(p1, p2, self.width, self.height) {
            self.bresenham(p1, p2, argb);
        }
    }

    fn bresenham(&mut self, from: Point, to: Point, argb: u32) {
        let (mut x, mut y) = (from.x as i64, from.y as i64);
        let (x2, y2) = (to.x as i64, to.y as i64);
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if let Some(idx) = self.index(x as i32, y as i32) {
                self.pixels[idx] = argb;
            }
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a rectangle.
    ///
    /// An opaque brush fills `width x height` pixels from `(x, y)`. An
    /// outline brush draws the border of the box spanning `x..=x + width`
    /// and `y..=y + height`. Negative sizes draw nothing.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, brush: Brush) {
        if width < 0 || height < 0 {
            return;
        }
        let argb = brush.color().to_argb();
        let (x0, y0) = (x as i64, y as i64);
        if brush.is_opaque() {
            let Some(area) = Rect::new(x, y, width, height).intersect(&self.bounds()) else {
                return;
            };
            for row in area.y..area.y + area.height {
                self.fill_span(
                    row as i64,
                    area.x as i64,
                    (area.x + area.width - 1) as i64,
                    argb,
                );
            }
            return;
        }

        let (x1, y1) = (x0 + width as i64, y0 + height as i64);
        self.fill_span(y0, x0, x1, argb);
        self.fill_span(y1, x0, x1, argb);
        let top = y0.max(0);
        let bottom = y1.min(self.height as i64 - 1);
        for row in top..=bottom {
            self.fill_span(row, x0, x0, argb);
            self.fill_span(row, x1, x1, argb);
        }
    }

    /// Draw the ellipse inscribed in the `width x height` box at `(x, y)`.
    ///
    /// A pixel belongs to the ellipse when its center lies inside it. The
    /// outline is made of the inside pixels that touch an outside pixel.
    pub fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, brush: Brush) {
        if width <= 0 || height <= 0 {
            return;
        }
        let Some(area) = Rect::new(x, y, width, height).intersect(&self.bounds()) else {
            return;
        };
        let ellipse = EllipseShape::new(x, y, width, height);
        let argb = brush.color().to_argb();
        for py in area.y..area.y + area.height {
            for px in area.x..area.x + area.width {
                if !ellipse.contains(px, py) {
                    continue;
                }
                if brush.is_opaque() || ellipse.is_edge(px, py) {
                    if let Some(idx) = self.index(px, py) {
                        self.pixels[idx] = argb;
                    }
                }
            }
        }
    }

    /// Draw a hexagon centered on `(cx, cy)` with circumradius `radius`.
    pub fn draw_hexagon(&mut self, cx: i32, cy: i32, radius: i32, brush: Brush) {
        self.draw_polygon(&hexagon_vertices(cx, cy, radius), brush);
    }

    /// Draw a closed polygon.
    ///
    /// Opaque brushes fill with the even-odd rule sampled at pixel centers,
    /// outline brushes connect consecutive points and close the path.
    pub fn draw_polygon(&mut self, points: &[Point], brush: Brush) {
        if points.is_empty() {
            return;
        }
        if brush.is_opaque() {
            self.fill_polygon(points, brush.color().to_argb());
            return;
        }
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.draw_line(from.x, from.y, to.x, to.y, brush);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], argb: u32) {
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0) as i64;
        let max_y = (points.iter().map(|p| p.y).max().unwrap_or(-1) as i64)
            .min(self.height as i64 - 1);
        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

        for row in min_y..=max_y {
            let sample_y = row as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f64, b.y as f64);
                if ay == by || sample_y < ay.min(by) || sample_y >= ay.max(by) {
                    continue;
                }
                let t = (sample_y - ay) / (by - ay);
                crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                // Pixel px is covered when px + 0.5 lies in [left, right)
                let first = (pair[0] - 0.5).ceil() as i64;
                let last = (pair[1] - 0.5).ceil() as i64 - 1;
                self.fill_span(row, first, last, argb);
            }
        }
    }

    /// Copy the surface into an RGBA8 frame.
    pub fn capture(&self) -> CapturedFrame {
        let rgba: Vec<[u8; 4]> = self
            .pixels
            .iter()
            .map(|&argb| Color::from_argb(argb).to_rgba8())
            .collect();
        CapturedFrame::new(
            bytemuck::cast_slice(&rgba).to_vec(),
            self.width,
            self.height,
        )
    }
}

/// Pixel-center membership test for an axis-aligned ellipse.
struct EllipseShape {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl EllipseShape {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let rx = width as f64 / 2.0;
        let ry = height as f64 / 2.0;
        Self {
            cx: x as f64 + rx,
            cy: y as f64 + ry,
            rx,
            ry,
        }
    }

    fn contains(&self, px: i32, py: i32) -> bool {
        let dx = (px as f64 + 0.5 - self.cx) / self.rx;
        let dy = (py as f64 + 0.5 - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }

    fn is_edge(&self, px: i32, py: i32) -> bool {
        !self.contains(px.saturating_sub(1), py)
            || !self.contains(px.saturating_add(1), py)
            || !self.contains(px, py.saturating_sub(1))
            || !self.contains(px, py.saturating_add(1))
    }
}

/// Clip a segment to a `width x height` pixel grid (Cohen-Sutherland).
fn clip_line(from: Point, to: Point, width: u32, height: u32) -> Option<(Point, Point)> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;

    let x_max = width as f64 - 1.0;
    let y_max = height as f64 - 1.0;
    let outcode = |x: f64, y: f64| {
        let mut code = 0;
        if x < 0.0 {
            code |= LEFT;
        } else if x > x_max {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= TOP;
        } else if y > y_max {
            code |= BOTTOM;
        }
        code
    };

    let (mut x0, mut y0) = (from.x as f64, from.y as f64);
    let (mut x1, mut y1) = (to.x as f64, to.y as f64);
    let mut code0 = outcode(x0, y0);
    let mut code1 = outcode(x1, y1);

    loop {
        if code0 | code1 == 0 {
            let p0 = Point::new(x0.round() as i32, y0.round() as i32);
            let p1 = Point::new(x1.round() as i32, y1.round() as i32);
            return Some((p0, p1));
        }
        if code0 & code1 != 0 {
            return None;
        }
        let out = if code0 != 0 { code0 } else { code1 };
        let (x, y) = if out & BOTTOM != 0 {
            (x0 + (x1 - x0) * (y_max - y0) / (y1 - y0), y_max)
        } else if out & TOP != 0 {
            (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
        } else if out & RIGHT != 0 {
            (x_max, y0 + (y1 - y0) * (x_max - x0) / (x1 - x0))
        } else {
            (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
        };
        if out == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(x0, y0);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(x1, y1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Brush = Brush::RED;

    fn painted(surface: &Surface) -> usize {
        surface.pixels().iter().filter(|&&p| p != 0).count()
    }

    fn is_ink(surface: &Surface, x: i32, y: i32) -> bool {
        surface.pixel(x, y) == Some(INK.color())
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert_eq!(painted(&surface), 0);
        assert_eq!(surface.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(-1, 0), None);
    }

    #[test]
    fn test_clear_ignores_style() {
        let mut surface = Surface::new(8, 8);
        surface.clear(Brush::BLUE);
        assert!(surface
            .pixels()
            .iter()
            .all(|&p| p == Brush::BLUE.color().to_argb()));
        surface.clear(Brush::GREEN.as_opaque());
        assert_eq!(surface.pixel(7, 7), Some(Brush::GREEN.color()));
    }

    #[test]
    fn test_line_includes_both_endpoints() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(1, 1, 5, 1, INK);
        for x in 1..=5 {
            assert!(is_ink(&surface, x, 1), "pixel {x} should be drawn");
        }
        assert!(!is_ink(&surface, 0, 1));
        assert!(!is_ink(&surface, 6, 1));
        assert_eq!(painted(&surface), 5);
    }

    #[test]
    fn test_diagonal_and_reversed_lines() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(3, 3, 0, 0, INK);
        for i in 0..=3 {
            assert!(is_ink(&surface, i, i));
        }
        assert_eq!(painted(&surface), 4);
    }

    #[test]
    fn test_single_point_line() {
        let mut surface = Surface::new(4, 4);
        surface.draw_line(2, 2, 2, 2, INK);
        assert!(is_ink(&surface, 2, 2));
        assert_eq!(painted(&surface), 1);
    }

    #[test]
    fn test_huge_line_is_clipped() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(-1_000_000, 5, 1_000_000, 5, INK);
        for x in 0..10 {
            assert!(is_ink(&surface, x, 5));
        }
        assert_eq!(painted(&surface), 10);

        surface.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, INK);
        assert!(is_ink(&surface, 0, 0));
    }

    #[test]
    fn test_line_outside_surface_draws_nothing() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(-5, -5, -1, 20, INK);
        surface.draw_line(20, 0, 30, 9, INK);
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_filled_rectangle() {
        let mut surface = Surface::new(10, 10);
        surface.draw_rectangle(2, 2, 3, 2, INK.as_opaque());
        assert_eq!(painted(&surface), 6);
        assert!(is_ink(&surface, 2, 2));
        assert!(is_ink(&surface, 4, 3));
        assert!(!is_ink(&surface, 5, 3));
        assert!(!is_ink(&surface, 2, 4));
    }

    #[test]
    fn test_outlined_rectangle() {
        let mut surface = Surface::new(10, 10);
        surface.draw_rectangle(2, 2, 3, 2, INK);
        // (w + 1) x (h + 1) box: 4 x 3 border
        assert_eq!(painted(&surface), 10);
        assert!(is_ink(&surface, 2, 2));
        assert!(is_ink(&surface, 5, 4));
        assert!(is_ink(&surface, 2, 3));
        assert!(!is_ink(&surface, 3, 3));
    }

    #[test]
    fn test_rectangle_clipped_and_negative() {
        let mut surface = Surface::new(10, 10);
        surface.draw_rectangle(2, 2, -3, 4, INK.as_opaque());
        surface.draw_rectangle(2, 2, 4, -1, INK);
        assert_eq!(painted(&surface), 0);

        surface.draw_rectangle(-5, -5, 100, 100, INK.as_opaque());
        assert_eq!(painted(&surface), 100);
    }

    #[test]
    fn test_outline_rectangle_partly_offscreen() {
        let mut surface = Surface::new(10, 10);
        surface.draw_rectangle(-2, 5, 4, 20, INK);
        // only the right edge (x = 2) and the top edge are visible
        assert!(is_ink(&surface, 0, 5));
        assert!(is_ink(&surface, 2, 9));
        assert!(!is_ink(&surface, 1, 9));
    }

    #[test]
    fn test_filled_ellipse() {
        let mut surface = Surface::new(10, 10);
        surface.draw_ellipse(0, 0, 10, 10, INK.as_opaque());
        assert!(is_ink(&surface, 5, 5));
        assert!(is_ink(&surface, 0, 5));
        assert!(!is_ink(&surface, 0, 0));
        assert!(!is_ink(&surface, 9, 9));
        // symmetric around the center of the box
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(is_ink(&surface, x, y), is_ink(&surface, 9 - x, y));
                assert_eq!(is_ink(&surface, x, y), is_ink(&surface, x, 9 - y));
            }
        }
    }

    #[test]
    fn test_outlined_ellipse() {
        let mut surface = Surface::new(10, 10);
        surface.draw_ellipse(0, 0, 10, 10, INK);
        assert!(is_ink(&surface, 0, 5));
        assert!(is_ink(&surface, 4, 0));
        assert!(!is_ink(&surface, 5, 5));
        assert!(!is_ink(&surface, 0, 0));

        let mut filled = Surface::new(10, 10);
        filled.draw_ellipse(0, 0, 10, 10, INK.as_opaque());
        assert!(painted(&surface) < painted(&filled));
    }

    #[test]
    fn test_degenerate_ellipse_draws_nothing() {
        let mut surface = Surface::new(10, 10);
        surface.draw_ellipse(1, 1, 0, 5, INK.as_opaque());
        surface.draw_ellipse(1, 1, 5, -1, INK);
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_filled_hexagon() {
        let mut surface = Surface::new(64, 64);
        surface.draw_hexagon(32, 32, 20, INK.as_opaque());
        assert!(is_ink(&surface, 32, 32));
        assert!(is_ink(&surface, 45, 32));
        assert!(!is_ink(&surface, 32, 10));
        assert!(!is_ink(&surface, 0, 0));
    }

    #[test]
    fn test_outlined_hexagon() {
        let mut surface = Surface::new(64, 64);
        surface.draw_hexagon(32, 32, 10, INK);
        for vertex in hexagon_vertices(32, 32, 10) {
            assert!(is_ink(&surface, vertex.x, vertex.y));
        }
        assert!(!is_ink(&surface, 32, 32));
        // the top edge is flat
        for x in 27..=37 {
            assert!(is_ink(&surface, x, 23));
        }
    }

    #[test]
    fn test_filled_polygon_square() {
        let mut surface = Surface::new(10, 10);
        let square = [
            Point::new(1, 1),
            Point::new(5, 1),
            Point::new(5, 5),
            Point::new(1, 5),
        ];
        surface.draw_polygon(&square, INK.as_opaque());
        // pixel centers inside [1, 5) x [1, 5)
        assert_eq!(painted(&surface), 16);
        assert!(is_ink(&surface, 1, 1));
        assert!(is_ink(&surface, 4, 4));
        assert!(!is_ink(&surface, 5, 5));
    }

    #[test]
    fn test_polygon_empty_and_single_point() {
        let mut surface = Surface::new(10, 10);
        surface.draw_polygon(&[], INK);
        surface.draw_polygon(&[], INK.as_opaque());
        assert_eq!(painted(&surface), 0);

        surface.draw_polygon(&[Point::new(3, 4)], INK);
        assert!(is_ink(&surface, 3, 4));
        assert_eq!(painted(&surface), 1);
    }

    #[test]
    fn test_capture_matches_pixels() {
        let mut surface = Surface::new(3, 2);
        surface.set_pixel(2, 1, Color::rgb(1, 2, 3));
        let frame = surface.capture();
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.get_pixel(2, 1), Some([1, 2, 3, 255]));
        assert_eq!(frame.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_zero_sized_surface_is_inert() {
        let mut surface = Surface::new(0, 0);
        surface.clear(INK);
        surface.draw_line(0, 0, 5, 5, INK);
        surface.draw_rectangle(0, 0, 5, 5, INK);
        surface.draw_rectangle(0, 0, 5, 5, INK.as_opaque());
        surface.draw_hexagon(0, 0, 5, INK.as_opaque());
        assert!(surface.pixels().is_empty());
    }
}
