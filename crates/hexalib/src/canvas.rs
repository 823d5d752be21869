//! The drawing canvas handed to applications
//!
//! A [`Canvas`] is a cheap, cloneable handle that can be used from any
//! thread. Drawing methods do not draw: they post a [`PaintCommand`] to
//! whoever owns the pixel surface (the UI thread of a window, or an
//! in-memory surface for headless use). Mouse events flow the other way
//! through a blocking [`MouseQueue`].

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hexalib_paint::command::PolygonPoints;
use hexalib_paint::{Brush, CapturedFrame, PaintCommand, Point};
use hexalib_platform::{MouseEvent, MouseQueue, RecvTimeoutError, TryRecvError};

use crate::error::{HexalibError, Result};

/// Destination of posted paint commands
///
/// Implementations apply commands in the order they are posted.
pub trait CommandSink: Send + Sync {
    /// Queue a command for the surface owner. Must not block on drawing.
    fn post(&self, command: PaintCommand) -> Result<()>;

    /// Wait until every previously posted command is applied, then copy
    /// the surface. Fails with [`HexalibError::Closed`] once closed.
    fn snapshot(&self) -> Result<CapturedFrame>;

    /// Ask the surface owner to shut down.
    fn close(&self);
}

/// Thread-safe handle for drawing shapes and receiving mouse events
#[derive(Clone)]
pub struct Canvas {
    sink: Arc<dyn CommandSink>,
    mouse: MouseQueue,
    width: u32,
    height: u32,
    warned_closed: Arc<AtomicBool>,
}

impl Canvas {
    /// Create a canvas posting to `sink` and reading mouse events from
    /// `mouse`.
    pub fn new(sink: Arc<dyn CommandSink>, mouse: MouseQueue, width: u32, height: u32) -> Self {
        Self {
            sink,
            mouse,
            width,
            height,
            warned_closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Post a raw paint command.
    pub fn post(&self, command: PaintCommand) -> Result<()> {
        tracing::trace!("post {}", command.name());
        let result = self.sink.post(command);
        if matches!(result, Err(HexalibError::Closed))
            && !self.warned_closed.swap(true, Ordering::Relaxed)
        {
            tracing::warn!("Drawing on a closed window; further drawing is discarded");
        }
        result
    }

    /// Clear the drawing area with the color of the brush.
    pub fn clear(&self, brush: Brush) -> Result<()> {
        self.post(PaintCommand::Clear { brush })
    }

    /// Draw a line from `(x1, y1)` to `(x2, y2)`, both ends included.
    pub fn draw_line(&self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Brush) -> Result<()> {
        self.post(PaintCommand::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            brush,
        })
    }

    /// Draw a rectangle with its upper left corner at `(x, y)`.
    ///
    /// If the brush is opaque the rectangle is filled with the color of the
    /// brush, otherwise only its contour is drawn.
    pub fn draw_rectangle(&self, x: i32, y: i32, width: i32, height: i32, brush: Brush) -> Result<()> {
        self.post(PaintCommand::Rectangle {
            x,
            y,
            width,
            height,
            brush,
        })
    }

    /// Draw the ellipse inscribed in the rectangle at `(x, y)` of size
    /// `width x height`.
    ///
    /// If the brush is opaque the ellipse is filled with the color of the
    /// brush, otherwise only its contour is drawn.
    pub fn draw_ellipse(&self, x: i32, y: i32, width: i32, height: i32, brush: Brush) -> Result<()> {
        self.post(PaintCommand::Ellipse {
            x,
            y,
            width,
            height,
            brush,
        })
    }

    /// Draw a hexagon centered on `(x, y)` whose corners are `radius`
    /// pixels away from the center.
    ///
    /// If the brush is opaque the hexagon is filled with the color of the
    /// brush, otherwise only its contour is drawn.
    pub fn draw_hexagon(&self, x: i32, y: i32, radius: i32, brush: Brush) -> Result<()> {
        self.post(PaintCommand::Hexagon {
            center: Point::new(x, y),
            radius,
            brush,
        })
    }

    /// Draw a closed polygon through `points`.
    pub fn draw_polygon(&self, points: &[Point], brush: Brush) -> Result<()> {
        self.post(PaintCommand::Polygon {
            points: PolygonPoints::from_slice(points),
            brush,
        })
    }

    /// Block until the next click or drag.
    ///
    /// Fails with [`HexalibError::Closed`] once the window is closed and
    /// every pending event has been consumed.
    pub fn wait_for_mouse_event(&self) -> Result<MouseEvent> {
        Ok(self.mouse.recv()?)
    }

    /// Block for at most `timeout`; `Ok(None)` when nothing happened.
    pub fn wait_for_mouse_event_timeout(&self, timeout: Duration) -> Result<Option<MouseEvent>> {
        match self.mouse.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Closed) => Err(HexalibError::Closed),
        }
    }

    /// Take a pending mouse event without blocking.
    pub fn poll_mouse_event(&self) -> Result<Option<MouseEvent>> {
        match self.mouse.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(HexalibError::Closed),
        }
    }

    /// Call `callback` for every mouse event, on the calling thread.
    ///
    /// Returns when the callback breaks or when the window is closed.
    pub fn wait_for_mouse_events<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(MouseEvent) -> ControlFlow<()>,
    {
        while let Ok(event) = self.mouse.recv() {
            if callback(event).is_break() {
                return Ok(());
            }
        }
        tracing::debug!("Mouse event loop ended: window closed");
        Ok(())
    }

    /// Copy the surface once every command posted so far is drawn.
    ///
    /// Fails with [`HexalibError::Closed`] after the window is closed.
    pub fn snapshot(&self) -> Result<CapturedFrame> {
        self.sink.snapshot()
    }

    /// Close the window and release every thread waiting for mouse events.
    pub fn close(&self) {
        self.sink.close();
    }

    /// Whether the window has been closed (no more mouse events will come)
    pub fn is_closed(&self) -> bool {
        self.mouse.is_closed()
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mouse", &self.mouse)
            .finish()
    }
}
