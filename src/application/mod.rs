mod game_state;
mod viewport;

pub use game_state::GameState;
pub use viewport::Viewport;
