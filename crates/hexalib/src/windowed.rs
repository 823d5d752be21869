//! Windowed application runner
//!
//! The event loop owns the pixel surface and runs on the calling thread.
//! The application function runs on its own thread with a [`Canvas`]; its
//! drawing calls are posted to the event loop, which applies them to the
//! surface and schedules a repaint, so the window never shows a half-drawn
//! shape.
//!
//! # Example
//!
//! ```ignore
//! use hexalib::prelude::*;
//!
//! fn main() -> hexalib::Result<()> {
//!     MainWindow::open("Hexagons", 400, 300, |canvas| {
//!         canvas.clear(Brush::WHITE)?;
//!         canvas.wait_for_mouse_events(|event| {
//!             let _ = canvas.draw_hexagon(event.x, event.y, 20, Brush::BLUE.as_opaque());
//!             std::ops::ControlFlow::Continue(())
//!         })?;
//!         Ok(())
//!     })
//! }
//! ```

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::{mpsc, Arc};
use std::thread;

use hexalib_paint::{CapturedFrame, PaintCommand, Surface};
use hexalib_platform::{
    ControlFlow, Event, EventLoop, LifecycleEvent, MouseQueue, Window, WindowConfig, WindowEvent,
};
use hexalib_platform_desktop::{DesktopEventLoop, EventProxy};
use parking_lot::Mutex;

use crate::canvas::{Canvas, CommandSink};
use crate::error::{HexalibError, Result};

/// Events posted to the UI thread
enum UiEvent {
    Paint(PaintCommand),
    Snapshot(mpsc::Sender<CapturedFrame>),
    Close,
    AppFinished(Result<()>),
}

struct DesktopSink {
    proxy: Mutex<EventProxy<UiEvent>>,
}

impl DesktopSink {
    fn send(&self, event: UiEvent) -> Result<()> {
        Ok(self.proxy.lock().send(event)?)
    }
}

impl CommandSink for DesktopSink {
    fn post(&self, command: PaintCommand) -> Result<()> {
        self.send(UiEvent::Paint(command))
    }

    fn snapshot(&self) -> Result<CapturedFrame> {
        let (tx, rx) = mpsc::channel();
        self.send(UiEvent::Snapshot(tx))?;
        rx.recv().map_err(|_| HexalibError::Closed)
    }

    fn close(&self) {
        if self.send(UiEvent::Close).is_err() {
            tracing::debug!("Close requested after the event loop exited");
        }
    }
}

/// A window showing a drawing surface
pub struct MainWindow;

impl MainWindow {
    /// Open a `width x height` window titled `title` and run `app` with its
    /// canvas. See [`MainWindow::run`].
    pub fn open<F>(title: impl Into<String>, width: u32, height: u32, app: F) -> Result<()>
    where
        F: FnOnce(Canvas) -> anyhow::Result<()> + Send + 'static,
    {
        Self::run(WindowConfig::new(title, width, height), app)
    }

    /// Create the window, then run `app` on a worker thread.
    ///
    /// Must be called from the main thread; it returns when the window is
    /// closed. If `app` fails or panics the window closes and the failure
    /// is returned. If it succeeds the window stays open until the user
    /// closes it, unless [`WindowConfig::close_when_done`] is set.
    pub fn run<F>(config: WindowConfig, app: F) -> Result<()>
    where
        F: FnOnce(Canvas) -> anyhow::Result<()> + Send + 'static,
    {
        let event_loop = DesktopEventLoop::<UiEvent>::new(config.clone())?;
        let proxy = event_loop.proxy();
        let mouse = MouseQueue::new();
        let canvas = Canvas::new(
            Arc::new(DesktopSink {
                proxy: Mutex::new(proxy.clone()),
            }),
            mouse.clone(),
            config.width,
            config.height,
        );

        let launch = Box::new(move || spawn_app(app, canvas, proxy));
        let state = Rc::new(RefCell::new(UiState::new(&config, mouse, launch)));
        let handler_state = Rc::clone(&state);

        event_loop.run(move |event, window| handler_state.borrow_mut().handle(event, window))?;

        let outcome = state.borrow_mut().outcome();
        outcome
    }
}

/// Starts the application thread once the window exists
type Launch = Box<dyn FnOnce() -> Result<()>>;

/// Everything the UI thread owns: the surface, the mouse queue producer
/// side and the outcome of the application.
struct UiState {
    surface: Surface,
    mouse: MouseQueue,
    close_when_done: bool,
    launch: Option<Launch>,
    failure: Option<HexalibError>,
    closed: bool,
}

impl UiState {
    fn new(config: &WindowConfig, mouse: MouseQueue, launch: Launch) -> Self {
        Self {
            surface: Surface::new(config.width, config.height),
            mouse,
            close_when_done: config.close_when_done,
            launch: Some(launch),
            failure: None,
            closed: false,
        }
    }

    fn close(&mut self) -> ControlFlow {
        self.closed = true;
        self.mouse.close();
        ControlFlow::Exit
    }

    fn fail(&mut self, error: HexalibError) -> ControlFlow {
        tracing::error!("{}", error);
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        self.close()
    }

    fn handle<W: Window>(&mut self, event: Event<UiEvent>, window: &W) -> ControlFlow {
        match event {
            Event::Lifecycle(LifecycleEvent::Resumed) => match self.launch.take() {
                Some(launch) => match launch() {
                    Ok(()) => ControlFlow::Continue,
                    Err(e) => self.fail(e),
                },
                None => ControlFlow::Continue,
            },

            // Commands racing the close are dropped
            Event::User(_) if self.closed => ControlFlow::Exit,

            Event::User(UiEvent::Paint(command)) => {
                command.apply(&mut self.surface);
                // Repaint after each command to avoid showing stale frames
                window.request_redraw();
                ControlFlow::Continue
            }

            Event::User(UiEvent::Snapshot(reply)) => {
                let _ = reply.send(self.surface.capture());
                ControlFlow::Continue
            }

            Event::User(UiEvent::Close) => {
                tracing::info!("Window closed by application");
                self.close()
            }

            Event::User(UiEvent::AppFinished(Ok(()))) => {
                tracing::debug!("Application function returned");
                if self.close_when_done {
                    self.close()
                } else {
                    ControlFlow::Continue
                }
            }

            Event::User(UiEvent::AppFinished(Err(e))) => self.fail(e),

            Event::Input(mouse_event) => {
                tracing::trace!("{}", mouse_event);
                self.mouse.push(mouse_event);
                ControlFlow::Continue
            }

            Event::Frame => {
                let (width, height) = (self.surface.width(), self.surface.height());
                if let Err(e) = window.present(self.surface.pixels(), width, height) {
                    tracing::error!("Failed to present surface: {}", e);
                }
                ControlFlow::Continue
            }

            Event::Window(WindowEvent::CloseRequested) => {
                tracing::info!("Window closed by user");
                self.close()
            }

            Event::Lifecycle(LifecycleEvent::Exiting) => {
                self.closed = true;
                self.mouse.close();
                ControlFlow::Continue
            }

            Event::Window(WindowEvent::Resized { .. }) | Event::Window(WindowEvent::Focused(_)) => {
                ControlFlow::Continue
            }
        }
    }

    /// The application failure, if any, once the loop has ended
    fn outcome(&mut self) -> Result<()> {
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Run the application function on a named worker thread and report its
/// outcome to the UI thread.
fn spawn_app<F>(app: F, canvas: Canvas, proxy: EventProxy<UiEvent>) -> Result<()>
where
    F: FnOnce(Canvas) -> anyhow::Result<()> + Send + 'static,
{
    thread::Builder::new()
        .name("hexalib-app".to_string())
        .spawn(move || {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| app(canvas))) {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(HexalibError::App(e)),
                Err(payload) => Err(HexalibError::AppPanicked(panic_message(&*payload))),
            };
            if proxy.send(UiEvent::AppFinished(outcome)).is_err() {
                tracing::debug!("Application finished after the window closed");
            }
        })
        .map_err(|e| HexalibError::Platform(hexalib_platform::PlatformError::Other(e.to_string())))?;
    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
