use std::path::Path;

use macroquad::logging::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest board `validate` accepts, in cells
pub const MAX_BOARD_CELLS: usize = 1_000_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub window: WindowConfig,
}

/// Board size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 30, cols: 30 }
    }
}

/// Simulation speed, in generations per second, and random fill density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub updates_per_second: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_step: f32,
    pub random_density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            updates_per_second: 10.0,
            min_speed: 1.0,
            max_speed: 60.0,
            speed_step: 1.0,
            random_density: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_owned(),
            width: 1000,
            height: 760,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 || self.board.cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be > 0".into(),
            ));
        }
        let too_large = self
            .board
            .rows
            .checked_mul(self.board.cols)
            .is_none_or(|cells| cells > MAX_BOARD_CELLS);
        if too_large {
            return Err(ConfigError::Validation(format!(
                "board.rows * board.cols must be <= {MAX_BOARD_CELLS}"
            )));
        }

        let sim = &self.simulation;
        let speeds = [
            ("updates_per_second", sim.updates_per_second),
            ("min_speed", sim.min_speed),
            ("max_speed", sim.max_speed),
            ("speed_step", sim.speed_step),
        ];
        if let Some((name, _)) = speeds.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "simulation.{name} must be a finite number"
            )));
        }
        if !sim.random_density.is_finite() {
            return Err(ConfigError::Validation(
                "simulation.random_density must be a finite number".into(),
            ));
        }
        if sim.min_speed <= 0.0 {
            return Err(ConfigError::Validation(
                "simulation.min_speed must be > 0".into(),
            ));
        }
        if sim.max_speed < sim.min_speed {
            return Err(ConfigError::Validation(
                "simulation.max_speed must be >= simulation.min_speed".into(),
            ));
        }
        if sim.updates_per_second < sim.min_speed || sim.updates_per_second > sim.max_speed {
            return Err(ConfigError::Validation(format!(
                "simulation.updates_per_second must be in [{}, {}]",
                sim.min_speed, sim.max_speed
            )));
        }
        if sim.speed_step <= 0.0 {
            return Err(ConfigError::Validation(
                "simulation.speed_step must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&sim.random_density) {
            return Err(ConfigError::Validation(
                "simulation.random_density must be in [0, 1]".into(),
            ));
        }

        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Validation(
                "window.width and window.height must be > 0".into(),
            ));
        }
        Ok(())
    }
}
