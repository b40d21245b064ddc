use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{GameState, Viewport};
use crate::ui::{Button, ButtonAction, grid_area_width};

/// Handle mouse painting on the board: press toggles, drag paints alive
pub fn handle_mouse_paint(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if is_mouse_button_released(MouseButton::Left) {
        state.release_stroke();
    }
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let point = viewport.screen_to_point(mouse_pos.0, mouse_pos.1);

    if is_mouse_button_pressed(MouseButton::Left) {
        state.press_cell(point);
    } else if is_mouse_button_down(MouseButton::Left) {
        state.drag_cell(point);
    }
}

/// Right click stamps the selected pattern
pub fn handle_pattern_stamp(
    state: GameState,
    viewport: &Viewport,
    mouse_pos: (f32, f32),
) -> GameState {
    if mouse_pos.0 < grid_area_width() && is_mouse_button_pressed(MouseButton::Right) {
        let point = viewport.screen_to_point(mouse_pos.0, mouse_pos.1);
        state.stamp_pattern(point)
    } else {
        state
    }
}

/// Apply the effect of one button or shortcut
pub fn apply_action<R: Rng + ?Sized>(state: GameState, action: ButtonAction, rng: &mut R) -> GameState {
    match action {
        ButtonAction::PlayPause => state.toggle_running(),
        ButtonAction::Step => state.step(),
        ButtonAction::Reset => state.reset(),
        ButtonAction::Random => state.randomize(rng),
        ButtonAction::Slower => state.slow_down(),
        ButtonAction::Faster => state.speed_up(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng + ?Sized>(state: GameState, rng: &mut R) -> GameState {
    let actions = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::C, ButtonAction::Reset),
        (KeyCode::R, ButtonAction::Random),
        (KeyCode::Up, ButtonAction::Faster),
        (KeyCode::Down, ButtonAction::Slower),
    ];

    let new_state = actions.iter().fold(state, |s, &(key, action)| {
        if is_key_pressed(key) {
            apply_action(s, action, rng)
        } else {
            s
        }
    });

    if is_key_pressed(KeyCode::P) {
        new_state.cycle_pattern()
    } else {
        new_state
    }
}

/// Process button clicks functionally
pub fn process_button_clicks<R: Rng + ?Sized>(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    rng: &mut R,
) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action(), rng)
        } else {
            s
        }
    })
}
