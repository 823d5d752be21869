//! Paint commands
//!
//! Drawing requests recorded as plain values, so they can be posted from any
//! thread and replayed on the thread that owns the [`Surface`].

use smallvec::SmallVec;

use crate::brush::Brush;
use crate::primitives::Point;
use crate::surface::Surface;

/// Polygon vertex storage; hexagons and small shapes stay inline
pub type PolygonPoints = SmallVec<[Point; 8]>;

/// A paint command for the surface
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    Clear {
        brush: Brush,
    },
    Line {
        from: Point,
        to: Point,
        brush: Brush,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        brush: Brush,
    },
    Ellipse {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        brush: Brush,
    },
    Hexagon {
        center: Point,
        radius: i32,
        brush: Brush,
    },
    Polygon {
        points: PolygonPoints,
        brush: Brush,
    },
}

impl PaintCommand {
    pub fn brush(&self) -> Brush {
        match self {
            PaintCommand::Clear { brush }
            | PaintCommand::Line { brush, .. }
            | PaintCommand::Rectangle { brush, .. }
            | PaintCommand::Ellipse { brush, .. }
            | PaintCommand::Hexagon { brush, .. }
            | PaintCommand::Polygon { brush, .. } => *brush,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PaintCommand::Clear { .. } => "clear",
            PaintCommand::Line { .. } => "line",
            PaintCommand::Rectangle { .. } => "rectangle",
            PaintCommand::Ellipse { .. } => "ellipse",
            PaintCommand::Hexagon { .. } => "hexagon",
            PaintCommand::Polygon { .. } => "polygon",
        }
    }

    /// Execute the command on a surface.
    pub fn apply(&self, surface: &mut Surface) {
        tracing::trace!("apply {} ({:?})", self.name(), self.brush());
        match self {
            PaintCommand::Clear { brush } => surface.clear(*brush),
            PaintCommand::Line { from, to, brush } => {
                surface.draw_line(from.x, from.y, to.x, to.y, *brush)
            }
            PaintCommand::Rectangle {
                x,
                y,
                width,
                height,
                brush,
            } => surface.draw_rectangle(*x, *y, *width, *height, *brush),
            PaintCommand::Ellipse {
                x,
                y,
                width,
                height,
                brush,
            } => surface.draw_ellipse(*x, *y, *width, *height, *brush),
            PaintCommand::Hexagon {
                center,
                radius,
                brush,
            } => surface.draw_hexagon(center.x, center.y, *radius, *brush),
            PaintCommand::Polygon { points, brush } => surface.draw_polygon(points, *brush),
        }
    }
}
