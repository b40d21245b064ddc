mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_SPACING: f32 = 44.0;
const FIRST_BUTTON_Y: f32 = 20.0;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    Reset,
    Random,
    Slower,
    Faster,
}

impl ButtonAction {
    /// All buttons, top to bottom
    pub const ALL: [ButtonAction; 6] = [
        ButtonAction::PlayPause,
        ButtonAction::Step,
        ButtonAction::Reset,
        ButtonAction::Random,
        ButtonAction::Slower,
        ButtonAction::Faster,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::PlayPause => "Play/Pause",
            ButtonAction::Step => "Step",
            ButtonAction::Reset => "Reset",
            ButtonAction::Random => "Random",
            ButtonAction::Slower => "Slower",
            ButtonAction::Faster => "Faster",
        }
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Y position just below the last button, where the labels start
pub fn labels_top() -> f32 {
    FIRST_BUTTON_Y + BUTTON_SPACING * ButtonAction::ALL.len() as f32 + 10.0
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, &action)| {
            Button::new(
                px,
                FIRST_BUTTON_Y + BUTTON_SPACING * idx as f32,
                PANEL_WIDTH - 20.0,
                BUTTON_HEIGHT,
                action,
            )
        })
        .collect()
}
