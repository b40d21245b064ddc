mod board;
mod error;
mod patterns;
mod point;
mod status;

pub use board::Board;
pub use error::BoardError;
pub use patterns::{Pattern, presets};
pub use point::{MOORE_OFFSETS, Point};
pub use status::Status;
