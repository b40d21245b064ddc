// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Configuration and command line
pub mod config;
pub mod error;
pub mod options;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, BoardError, Pattern, Point, Status, presets};
pub use application::{GameState, Viewport};
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
