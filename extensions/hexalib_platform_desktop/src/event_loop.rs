//! Desktop event loop implementation using winit

use crate::input::{self, ClickTracker};
use crate::window::DesktopWindow;
use hexalib_platform::{
    ControlFlow, Event, EventLoop, LifecycleEvent, PlatformError, Window, WindowConfig,
    WindowEvent,
};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::{
    ActiveEventLoop, ControlFlow as WinitControlFlow, EventLoop as WinitEventLoop, EventLoopProxy,
};
use winit::window::WindowId;

/// Posts events to the UI thread from any thread
///
/// Events are delivered in the order they are sent.
pub struct EventProxy<T: 'static> {
    proxy: EventLoopProxy<T>,
}

impl<T: 'static> Clone for EventProxy<T> {
    fn clone(&self) -> Self {
        Self {
            proxy: self.proxy.clone(),
        }
    }
}

impl<T: 'static> EventProxy<T> {
    /// Send an event, failing with [`PlatformError::Closed`] once the loop
    /// has exited
    pub fn send(&self, event: T) -> Result<(), PlatformError> {
        self.proxy
            .send_event(event)
            .map_err(|_| PlatformError::Closed)
    }
}

/// Desktop event loop wrapping winit's event loop
pub struct DesktopEventLoop<T: 'static> {
    event_loop: WinitEventLoop<T>,
    window_config: WindowConfig,
    proxy: EventProxy<T>,
}

impl<T: Send + 'static> DesktopEventLoop<T> {
    /// Create a new desktop event loop. Must be called on the main thread.
    pub fn new(config: WindowConfig) -> Result<Self, PlatformError> {
        config.validate()?;

        // NOTE(macos): Explicitly set activation policy to Regular so the window behaves like a
        // normal app window even when the binary is not bundled.
        let event_loop = {
            let mut builder = WinitEventLoop::<T>::with_user_event();

            #[cfg(target_os = "macos")]
            {
                use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
                builder.with_activation_policy(ActivationPolicy::Regular);
            }

            builder
                .build()
                .map_err(|e| PlatformError::EventLoop(e.to_string()))?
        };
        event_loop.set_control_flow(WinitControlFlow::Wait);

        let proxy = EventProxy {
            proxy: event_loop.create_proxy(),
        };

        Ok(Self {
            event_loop,
            window_config: config,
            proxy,
        })
    }

    /// Get a proxy that posts user events to the UI thread
    pub fn proxy(&self) -> EventProxy<T> {
        self.proxy.clone()
    }
}

impl<T: Send + 'static> EventLoop for DesktopEventLoop<T> {
    type Window = DesktopWindow;
    type UserEvent = T;

    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event<T>, &Self::Window) -> ControlFlow + 'static,
    {
        let mut app = DesktopApp::new(self.window_config, handler);
        self.event_loop
            .run_app(&mut app)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))?;
        match app.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Internal winit application handler
struct DesktopApp<T, F>
where
    F: FnMut(Event<T>, &DesktopWindow) -> ControlFlow,
{
    window_config: WindowConfig,
    window: Option<DesktopWindow>,
    handler: F,
    clicks: ClickTracker,
    // User events that arrived before the window existed
    pending: Vec<T>,
    startup_error: Option<PlatformError>,
    should_exit: bool,
}

impl<T, F> DesktopApp<T, F>
where
    F: FnMut(Event<T>, &DesktopWindow) -> ControlFlow,
{
    fn new(window_config: WindowConfig, handler: F) -> Self {
        Self {
            window_config,
            window: None,
            handler,
            clicks: ClickTracker::new(),
            pending: Vec::new(),
            startup_error: None,
            should_exit: false,
        }
    }

    fn handle_event(&mut self, event: Event<T>) {
        if let Some(ref window) = self.window {
            let flow = (self.handler)(event, window);
            if flow == ControlFlow::Exit {
                self.should_exit = true;
            }
        }
    }
}

impl<T, F> ApplicationHandler<T> for DesktopApp<T, F>
where
    T: 'static,
    F: FnMut(Event<T>, &DesktopWindow) -> ControlFlow,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create window if we don't have one
        if self.window.is_none() {
            match DesktopWindow::new(event_loop, &self.window_config) {
                Ok(window) => {
                    let (width, height) = window.size();
                    tracing::info!(
                        "Created window \"{}\" ({}x{})",
                        self.window_config.title,
                        width,
                        height
                    );
                    self.window = Some(window);
                    self.handle_event(Event::Lifecycle(LifecycleEvent::Resumed));
                    for event in std::mem::take(&mut self.pending) {
                        self.handle_event(Event::User(event));
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to create window: {}", e);
                    self.startup_error = Some(e);
                    event_loop.exit();
                    return;
                }
            }
        }

        if let Some(ref window) = self.window {
            window.request_redraw();
        }
        if self.should_exit {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => {
                self.handle_event(Event::Window(WindowEvent::CloseRequested));
            }

            WinitWindowEvent::Resized(size) => {
                self.handle_event(Event::Window(WindowEvent::Resized {
                    width: size.width,
                    height: size.height,
                }));
                if let Some(ref window) = self.window {
                    window.request_redraw();
                }
            }

            WinitWindowEvent::Focused(focused) => {
                if !focused {
                    self.clicks.reset();
                }
                self.handle_event(Event::Window(WindowEvent::Focused(focused)));
            }

            WinitWindowEvent::RedrawRequested => {
                self.handle_event(Event::Frame);
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                if let Some(mouse_event) = self.clicks.cursor_moved(position.x, position.y) {
                    self.handle_event(Event::Input(mouse_event));
                }
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let button = input::convert_button(button);
                match state {
                    ElementState::Pressed => self.clicks.pressed(button),
                    ElementState::Released => {
                        if let Some(mouse_event) = self.clicks.released(button) {
                            self.handle_event(Event::Input(mouse_event));
                        }
                    }
                }
            }

            _ => {}
        }

        // Check for exit
        if self.should_exit {
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: T) {
        if self.window.is_none() {
            self.pending.push(event);
            return;
        }
        self.handle_event(Event::User(event));
        if self.should_exit {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        tracing::info!("Event loop exiting");
        self.handle_event(Event::Lifecycle(LifecycleEvent::Exiting));
    }
}
