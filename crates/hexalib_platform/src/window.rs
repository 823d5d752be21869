//! Window and event loop abstractions

use crate::error::Result;
use crate::event::{ControlFlow, Event};

/// A window that can show a drawing surface
pub trait Window {
    /// Client area size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Ask the platform to deliver an [`Event::Frame`]
    fn request_redraw(&self);

    /// Show `pixels`, a row-major ARGB buffer of `width x height`, anchored
    /// at the top-left corner of the client area.
    fn present(&self, pixels: &[u32], width: u32, height: u32) -> Result<()>;
}

/// A platform event loop, run on the thread that created it
pub trait EventLoop {
    type Window: Window;

    /// Payload of events posted from other threads
    type UserEvent: Send + 'static;

    /// Run until the handler returns [`ControlFlow::Exit`] or the platform
    /// shuts the loop down.
    fn run<F>(self, handler: F) -> Result<()>
    where
        F: FnMut(Event<Self::UserEvent>, &Self::Window) -> ControlFlow + 'static;
}
