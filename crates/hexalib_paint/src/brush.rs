//! Brushes: a color and a painting style
//!
//! A brush that is opaque fills the content of a shape, otherwise only the
//! contour is drawn. Brushes are small immutable values, so the opaque
//! counterpart of a brush is derived on demand rather than cached.

use crate::color::Color;
use crate::error::{PaintError, Result};

/// A color and a style of painting (opaque or outline)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Brush {
    color: Color,
    opaque: bool,
}

impl Brush {
    pub const RED: Brush = Brush::new(255, 0, 0);
    pub const GREEN: Brush = Brush::new(0, 255, 0);
    pub const BLUE: Brush = Brush::new(0, 0, 244);
    pub const LIGHT_GRAY: Brush = Brush::new(192, 192, 192);
    pub const GRAY: Brush = Brush::new(128, 128, 128);
    pub const DARK_GRAY: Brush = Brush::new(64, 64, 64);
    pub const BLACK: Brush = Brush::new(0, 0, 0);
    pub const WHITE: Brush = Brush::new(255, 255, 255);
    pub const PINK: Brush = Brush::new(255, 175, 175);
    pub const ORANGE: Brush = Brush::new(255, 200, 0);
    pub const YELLOW: Brush = Brush::new(255, 255, 0);
    pub const MAGENTA: Brush = Brush::new(255, 0, 255);
    pub const CYAN: Brush = Brush::new(0, 255, 255);

    /// Create an outline brush from color components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::from_color(Color::rgb(red, green, blue))
    }

    /// Create an outline brush, validating each component is in `0..=255`.
    pub fn try_new(red: i32, green: i32, blue: i32) -> Result<Self> {
        Ok(Self::new(
            check_component(red)?,
            check_component(green)?,
            check_component(blue)?,
        ))
    }

    /// Create an outline brush painting with `color`.
    pub const fn from_color(color: Color) -> Self {
        Self {
            color,
            opaque: false,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns true if shapes drawn with this brush are filled.
    pub const fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Returns a brush with the same color and an opaque style.
    pub const fn as_opaque(self) -> Self {
        Self {
            opaque: true,
            ..self
        }
    }

    /// Returns a brush with the same color that only draws contours.
    pub const fn as_outline(self) -> Self {
        Self {
            opaque: false,
            ..self
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::BLACK
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::from_color(color)
    }
}

fn check_component(component: i32) -> Result<u8> {
    u8::try_from(component).map_err(|_| PaintError::ColorComponent(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_brush_is_outline() {
        let brush = Brush::new(10, 20, 30);
        assert!(!brush.is_opaque());
        assert_eq!(brush.color(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_as_opaque_keeps_color() {
        let opaque = Brush::PINK.as_opaque();
        assert!(opaque.is_opaque());
        assert_eq!(opaque.color(), Brush::PINK.color());
    }

    #[test]
    fn test_as_opaque_is_idempotent() {
        let once = Brush::CYAN.as_opaque();
        assert_eq!(once.as_opaque(), once);
        assert_eq!(Brush::CYAN.as_opaque(), Brush::CYAN.as_opaque());
    }

    #[test]
    fn test_as_outline_inverts_as_opaque() {
        assert_eq!(Brush::GRAY.as_opaque().as_outline(), Brush::GRAY);
    }

    #[test]
    fn test_try_new_rejects_out_of_range_components() {
        assert_eq!(
            Brush::try_new(256, 0, 0),
            Err(PaintError::ColorComponent(256))
        );
        assert_eq!(
            Brush::try_new(0, -1, 0),
            Err(PaintError::ColorComponent(-1))
        );
        assert_eq!(Brush::try_new(0, 0, 255), Ok(Brush::new(0, 0, 255)));
    }

    #[test]
    fn test_error_message() {
        let err = Brush::try_new(0, 0, 300).unwrap_err();
        assert_eq!(err.to_string(), "bad component value 300");
    }

    #[test]
    fn test_palette_constants() {
        assert_eq!(Brush::BLUE.color(), Color::rgb(0, 0, 244));
        assert_eq!(Brush::ORANGE.color(), Color::ORANGE);
        assert!(!Brush::BLACK.is_opaque());
    }
}
