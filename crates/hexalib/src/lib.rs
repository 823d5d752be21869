//! Hexalib
//!
//! A small library for graphics assignments: open a window, draw simple
//! shapes on its pixel surface and react to mouse clicks and drags.
//!
//! - [`MainWindow`] opens the window and runs your code on a worker thread
//! - [`Canvas`] draws shapes and waits for mouse events; it is `Clone`,
//!   `Send` and `Sync`, so any thread may draw
//! - [`Brush`] picks the color and whether shapes are filled
//! - [`HeadlessCanvas`] gives the same API without a window, for tests
//!
//! # Example
//!
//! ```rust
//! use hexalib::prelude::*;
//!
//! let (canvas, handle) = HeadlessCanvas::new(100, 100);
//! canvas.clear(Brush::WHITE).unwrap();
//! canvas.draw_hexagon(50, 50, 30, Brush::RED.as_opaque()).unwrap();
//!
//! handle.click(50, 50);
//! let event = canvas.wait_for_mouse_event().unwrap();
//! assert_eq!((event.x, event.y), (50, 50));
//! assert_eq!(handle.capture().get_pixel(50, 50), Some([255, 0, 0, 255]));
//! ```

mod canvas;
mod error;
mod headless;
#[cfg(feature = "windowed")]
mod windowed;


pub use canvas::{Canvas, CommandSink};
pub use error::{HexalibError, Result};
pub use headless::{HeadlessCanvas, HeadlessHandle};
#[cfg(feature = "windowed")]
pub use windowed::MainWindow;

pub use hexalib_paint::{Brush, CapturedFrame, Color, PaintCommand, PaintError, Point};
pub use hexalib_platform::{MouseButton, MouseEvent, MouseEventKind, WindowConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{HexalibError, Result};
    pub use crate::headless::{HeadlessCanvas, HeadlessHandle};
    #[cfg(feature = "windowed")]
    pub use crate::windowed::MainWindow;

    pub use hexalib_paint::{Brush, Color, Point};
    pub use hexalib_platform::{MouseButton, MouseEvent, MouseEventKind, WindowConfig};
}
