//! Platform events

use std::fmt;

/// Mouse button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// What happened to the mouse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button was pressed and released without moving the mouse
    Clicked,
    /// The mouse moved while a button was held
    Dragged,
}

/// A mouse event in surface pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    pub const fn clicked(button: MouseButton, x: i32, y: i32) -> Self {
        Self {
            kind: MouseEventKind::Clicked,
            button,
            x,
            y,
        }
    }

    pub const fn dragged(button: MouseButton, x: i32, y: i32) -> Self {
        Self {
            kind: MouseEventKind::Dragged,
            button,
            x,
            y,
        }
    }

    pub const fn is_click(&self) -> bool {
        matches!(self.kind, MouseEventKind::Clicked)
    }

    pub const fn is_drag(&self) -> bool {
        matches!(self.kind, MouseEventKind::Dragged)
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MouseEventKind::Clicked => "clicked",
            MouseEventKind::Dragged => "dragged",
        };
        write!(f, "{:?} {} at ({}, {})", self.button, kind, self.x, self.y)
    }
}

/// Application lifecycle events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The window exists and the surface can be shown
    Resumed,
    /// The event loop is about to exit
    Exiting,
}

/// Window events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    CloseRequested,
    Resized { width: u32, height: u32 },
    Focused(bool),
}

/// Unified platform event, with `T` carrying events posted from other threads
#[derive(Debug)]
pub enum Event<T> {
    Lifecycle(LifecycleEvent),
    Window(WindowEvent),
    Input(MouseEvent),
    /// The window needs repainting
    Frame,
    /// An event posted through the event loop proxy
    User(T),
}

/// Control flow returned by event handlers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    #[default]
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_event_helpers() {
        let click = MouseEvent::clicked(MouseButton::Left, 3, 4);
        assert!(click.is_click());
        assert!(!click.is_drag());
        assert_eq!(click.to_string(), "Left clicked at (3, 4)");

        let drag = MouseEvent::dragged(MouseButton::Other(8), -1, 2);
        assert!(drag.is_drag());
        assert_eq!(drag.to_string(), "Other(8) dragged at (-1, 2)");
    }
}
