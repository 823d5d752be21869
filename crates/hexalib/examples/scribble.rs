//! Scribble Example
//!
//! Drag to draw, click to stamp an ellipse. The window is configured from a
//! TOML file when one is given on the command line:
//!
//! ```toml
//! title = "Scribble"
//! width = 640
//! height = 480
//! ```
//!
//! Run with: cargo run -p hexalib --example scribble [config.toml]

use hexalib::prelude::*;

// Drags further apart than this start a new stroke
const STROKE_GAP: i32 = 24;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => WindowConfig::load(path)?,
        None => WindowConfig::new("Scribble", 640, 480),
    };

    MainWindow::run(config, |canvas| {
        canvas.clear(Brush::WHITE)?;
        canvas.draw_rectangle(
            0,
            0,
            canvas.width() as i32 - 1,
            canvas.height() as i32 - 1,
            Brush::GRAY,
        )?;

        let mut last: Option<(i32, i32)> = None;
        loop {
            let event = match canvas.wait_for_mouse_event() {
                Ok(event) => event,
                Err(HexalibError::Closed) => return Ok(()),
                Err(e) => return Err(e.into()),
            };
            match event.kind {
                MouseEventKind::Dragged => {
                    let (x0, y0) = last
                        .filter(|(x, y)| (x - event.x).abs().max((y - event.y).abs()) <= STROKE_GAP)
                        .unwrap_or((event.x, event.y));
                    canvas.draw_line(x0, y0, event.x, event.y, Brush::BLACK)?;
                    last = Some((event.x, event.y));
                }
                MouseEventKind::Clicked => {
                    last = None;
                    let brush = match event.button {
                        MouseButton::Left => Brush::ORANGE.as_opaque(),
                        _ => Brush::CYAN,
                    };
                    canvas.draw_ellipse(event.x - 10, event.y - 6, 20, 12, brush)?;
                }
            }
        }
    })?;
    Ok(())
}
