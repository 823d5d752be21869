//! Hexagon Board Example
//!
//! Draws a board of flat-topped hexagons. Clicking a cell fills it with the
//! current player's color; players alternate. Right click clears the board.
//!
//! Run with: cargo run -p hexalib --example hex_board

use std::ops::ControlFlow;

use hexalib::prelude::*;

const RADIUS: i32 = 24;
const COLUMNS: i32 = 11;
const ROWS: i32 = 8;

/// Center of the cell at `(column, row)`
fn cell_center(column: i32, row: i32) -> (i32, i32) {
    let height = (RADIUS as f64 * 3f64.sqrt()) as i32;
    let x = RADIUS + 4 + column * (RADIUS * 3 / 2);
    let y = height / 2 + 4 + row * height + if column % 2 == 1 { height / 2 } else { 0 };
    (x, y)
}

/// Cell whose center is closest to `(x, y)`, if close enough to be inside
fn cell_at(x: i32, y: i32) -> Option<(i32, i32)> {
    (0..COLUMNS)
        .flat_map(|c| (0..ROWS).map(move |r| (c, r)))
        .map(|(c, r)| {
            let (cx, cy) = cell_center(c, r);
            let d = (cx - x).pow(2) + (cy - y).pow(2);
            (d, (c, r))
        })
        .min_by_key(|(d, _)| *d)
        .filter(|(d, _)| *d <= RADIUS * RADIUS)
        .map(|(_, cell)| cell)
}

fn draw_board(canvas: &Canvas) -> hexalib::Result<()> {
    canvas.clear(Brush::LIGHT_GRAY)?;
    for column in 0..COLUMNS {
        for row in 0..ROWS {
            let (x, y) = cell_center(column, row);
            canvas.draw_hexagon(x, y, RADIUS - 1, Brush::WHITE.as_opaque())?;
            canvas.draw_hexagon(x, y, RADIUS - 1, Brush::DARK_GRAY)?;
        }
    }
    Ok(())
}

fn main() -> hexalib::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (width, height) = cell_center(COLUMNS - 1, ROWS - 1);
    let config = WindowConfig {
        title: "Hexalib Board".to_string(),
        width: (width + RADIUS + 4) as u32,
        height: (height + RADIUS + 4) as u32,
        ..Default::default()
    };

    MainWindow::run(config, |canvas| {
        draw_board(&canvas)?;
        let players = [Brush::RED.as_opaque(), Brush::BLUE.as_opaque()];
        let mut turn = 0;

        canvas.wait_for_mouse_events(|event| {
            if !event.is_click() {
                return ControlFlow::Continue(());
            }
            let result = if event.button == MouseButton::Right {
                turn = 0;
                draw_board(&canvas)
            } else if let Some((column, row)) = cell_at(event.x, event.y) {
                let (x, y) = cell_center(column, row);
                let player = turn % players.len();
                turn += 1;
                tracing::info!("Cell ({}, {}) taken by player {}", column, row, player + 1);
                let brush = players[player];
                canvas.draw_hexagon(x, y, RADIUS - 4, brush)
            } else {
                Ok(())
            };
            match result {
                Ok(()) => ControlFlow::Continue(()),
                Err(_) => ControlFlow::Break(()),
            }
        })?;
        Ok(())
    })
}
