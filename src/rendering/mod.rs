use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::Board;
use crate::ui::{Button, PANEL_WIDTH, labels_top, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0); // Bright green
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board
pub fn draw_board(board: &Board, viewport: &Viewport) {
    let size = viewport.cell_size;
    // Grid lines only when cells are big enough to see them
    let draw_grid_lines = size >= 4.0;

    for (point, status) in board.iter_cells() {
        let (x, y) = viewport.point_to_screen(point);
        let color = if status.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);

        if draw_grid_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Outline the cell under the cursor, if it is on the board
pub fn draw_hover(board: &Board, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let point = viewport.screen_to_point(mouse_pos.0, mouse_pos.1);
    if board.contains(point) {
        let (x, y) = viewport.point_to_screen(point);
        let size = viewport.cell_size;
        draw_rectangle_lines(x, y, size, size, 2.0, Color::from_rgba(255, 255, 0, 180));
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let top = labels_top();
    let (rows, cols) = state.board.dimensions();
    let value_color = Color::from_rgba(180, 180, 180, 255);
    let pattern_name = state.current_pattern().map_or("-", |p| p.name);

    let (status_text, status_color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    let labels: [(&str, f32, f32, Color); 11] = [
        ("Generation:", top, 16.0, WHITE),
        (&format!("{}", state.generation), top + 22.0, 22.0, ALIVE_COLOR),
        ("Population:", top + 50.0, 16.0, WHITE),
        (&format!("{}", state.board.population()), top + 70.0, 16.0, value_color),
        ("Speed:", top + 98.0, 16.0, WHITE),
        (&format!("{:.0} gen/s", state.updates_per_second), top + 118.0, 16.0, value_color),
        ("Status:", top + 146.0, 16.0, WHITE),
        (status_text, top + 166.0, 16.0, status_color),
        ("Pattern:", top + 194.0, 16.0, WHITE),
        (pattern_name, top + 214.0, 16.0, value_color),
        (&format!("Board: {rows}x{cols}"), top + 242.0, 14.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let controls = [
        "LMB: Toggle / paint",
        "RMB: Stamp pattern",
        "P: Next pattern",
        "Space: Play  N: Step",
        "C: Reset  R: Random",
        "Up/Down: Speed",
    ];
    let controls_top = top + 270.0;
    controls.iter().enumerate().for_each(|(idx, text)| {
        draw_text(text, px, controls_top + idx as f32 * 14.0, 13.0, GRAY);
    });
}
