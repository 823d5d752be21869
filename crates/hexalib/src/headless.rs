//! Headless canvas for tests and off-screen rendering.
//!
//! Commands are applied synchronously to an in-memory surface, so a
//! snapshot taken right after a drawing call always contains it. The
//! [`HeadlessHandle`] plays the part of the user: it injects mouse events
//! and closes the "window".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hexalib_paint::{CapturedFrame, PaintCommand, Surface};
use hexalib_platform::{MouseButton, MouseEvent, MouseQueue};
use parking_lot::Mutex;

use crate::canvas::{Canvas, CommandSink};
use crate::error::{HexalibError, Result};

struct Shared {
    surface: Mutex<Surface>,
    mouse: MouseQueue,
    closed: AtomicBool,
}

impl Shared {
    fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("Headless canvas closed");
        }
        self.mouse.close();
    }
}

struct HeadlessSink {
    shared: Arc<Shared>,
}

impl CommandSink for HeadlessSink {
    fn post(&self, command: PaintCommand) -> Result<()> {
        if self.shared.closed.load(Ordering::Acquire) {
            return Err(HexalibError::Closed);
        }
        command.apply(&mut self.shared.surface.lock());
        Ok(())
    }

    fn snapshot(&self) -> Result<CapturedFrame> {
        if self.shared.closed.load(Ordering::Acquire) {
            return Err(HexalibError::Closed);
        }
        Ok(self.shared.surface.lock().capture())
    }

    fn close(&self) {
        self.shared.close();
    }
}

/// Factory for canvases backed by an in-memory surface
pub struct HeadlessCanvas;

impl HeadlessCanvas {
    /// Create a `width x height` canvas and the handle that controls it.
    pub fn new(width: u32, height: u32) -> (Canvas, HeadlessHandle) {
        let shared = Arc::new(Shared {
            surface: Mutex::new(Surface::new(width, height)),
            mouse: MouseQueue::new(),
            closed: AtomicBool::new(false),
        });
        let sink = Arc::new(HeadlessSink {
            shared: Arc::clone(&shared),
        });
        let canvas = Canvas::new(sink, shared.mouse.clone(), width, height);
        (canvas, HeadlessHandle { shared })
    }
}

/// Controls a headless canvas from the "user" side
#[derive(Clone)]
pub struct HeadlessHandle {
    shared: Arc<Shared>,
}

impl HeadlessHandle {
    /// Deliver a mouse event as if the user produced it.
    pub fn push_mouse_event(&self, event: MouseEvent) -> bool {
        self.shared.mouse.push(event)
    }

    /// Left click at `(x, y)`.
    pub fn click(&self, x: i32, y: i32) -> bool {
        self.push_mouse_event(MouseEvent::clicked(MouseButton::Left, x, y))
    }

    /// Left-button drag through `(x, y)`.
    pub fn drag(&self, x: i32, y: i32) -> bool {
        self.push_mouse_event(MouseEvent::dragged(MouseButton::Left, x, y))
    }

    /// Copy the current surface, also after the canvas is closed.
    pub fn capture(&self) -> CapturedFrame {
        self.shared.surface.lock().capture()
    }

    /// Inspect the surface in place.
    pub fn with_surface<R>(&self, f: impl FnOnce(&Surface) -> R) -> R {
        f(&self.shared.surface.lock())
    }

    /// Close the canvas as if the user closed the window.
    pub fn close(&self) {
        self.shared.close();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }
}
