//! Hexalib Desktop Platform
//!
//! Windowing, mouse input and software presentation for macOS, Windows and
//! Linux, built on winit and softbuffer.

pub mod event_loop;
pub mod input;
pub mod window;

pub use event_loop::{DesktopEventLoop, EventProxy};
pub use window::DesktopWindow;
