//! Hexalib Paint API
//!
//! A tiny software 2D drawing API for teaching, in the spirit of a classic
//! `Graphics` context drawing into an off-screen image.
//!
//! # Features
//!
//! - A [`Brush`] value: a color plus a fill/outline style
//! - Shape primitives (line, rectangle, ellipse, hexagon, polygon)
//! - A CPU pixel [`Surface`] that rasterizes them
//! - [`PaintCommand`] values that can be posted across threads
//! - Frame capture for tests and screenshots
//!
//! # Example
//!
//! ```rust
//! use hexalib_paint::{Brush, Surface};
//!
//! let mut surface = Surface::new(64, 64);
//! surface.clear(Brush::WHITE);
//! surface.draw_hexagon(32, 32, 20, Brush::RED.as_opaque());
//! assert_eq!(surface.pixel(32, 32), Some(Brush::RED.color()));
//! ```

pub mod brush;
pub mod capture;
pub mod color;
pub mod command;
pub mod error;
pub mod primitives;
pub mod surface;

pub use brush::Brush;
pub use capture::CapturedFrame;
pub use color::Color;
pub use command::PaintCommand;
pub use error::{PaintError, Result};
pub use primitives::{hexagon_vertices, Point, Rect};
pub use surface::Surface;
