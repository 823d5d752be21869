//! Hexalib Platform Abstraction
//!
//! Platform-neutral pieces shared by every backend:
//!
//! - **Configuration**: [`WindowConfig`], loadable from TOML
//! - **Events**: mouse click/drag events and the unified [`Event`] enum
//! - **Mouse queue**: the blocking hand-off from the UI thread to
//!   application threads
//! - **Traits**: [`Window`] and [`EventLoop`] implemented by backends

pub mod config;
pub mod error;
pub mod event;
pub mod queue;
pub mod window;

pub use config::WindowConfig;
pub use error::{PlatformError, Result};
pub use event::{
    ControlFlow, Event, LifecycleEvent, MouseButton, MouseEvent, MouseEventKind, WindowEvent,
};
pub use queue::{MouseQueue, QueueClosed, RecvTimeoutError, TryRecvError};
pub use window::{EventLoop, Window};
