//! Mouse input conversion
//!
//! winit reports raw presses, releases and cursor motion. Applications only
//! see two kinds of events: a click (press and release with no motion in
//! between) and a drag (motion while a button is held). Plain motion is not
//! reported.

use hexalib_platform::{MouseButton, MouseEvent};

/// Convert a winit mouse button
pub fn convert_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

#[derive(Clone, Copy, Debug)]
struct Held {
    button: MouseButton,
    dragged: bool,
}

/// Turns press/move/release sequences into click and drag events
#[derive(Clone, Debug, Default)]
pub struct ClickTracker {
    position: (i32, i32),
    held: Option<Held>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in pixels
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// The cursor moved to `(x, y)` (physical pixels, fractional).
    ///
    /// Sub-pixel motion is not a drag: the event fires only when the
    /// pixel under the cursor changes.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<MouseEvent> {
        let position = (x.floor() as i32, y.floor() as i32);
        if position == self.position {
            return None;
        }
        self.position = position;
        let held = self.held.as_mut()?;
        held.dragged = true;
        Some(MouseEvent::dragged(held.button, position.0, position.1))
    }

    /// A button went down. Only the first held button is tracked.
    pub fn pressed(&mut self, button: MouseButton) {
        if self.held.is_none() {
            self.held = Some(Held {
                button,
                dragged: false,
            });
        }
    }

    /// A button went up; yields a click if the mouse did not move.
    pub fn released(&mut self, button: MouseButton) -> Option<MouseEvent> {
        match self.held {
            Some(held) if held.button == button => {
                self.held = None;
                (!held.dragged)
                    .then(|| MouseEvent::clicked(button, self.position.0, self.position.1))
            }
            _ => None,
        }
    }

    /// Forget any held button, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.held = None;
    }
}
