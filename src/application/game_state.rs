use macroquad::logging::{debug, info};
use rand::Rng;

use crate::config::SimulationConfig;
use crate::domain::{Board, Pattern, Point, Status, presets};

/// GameState orchestrates the simulation.
/// This is the application layer that drives the board: it owns the
/// play/pause flag, the generation counter and the paint stroke, while the
/// board itself stays a plain value.
pub struct GameState {
    pub board: Board,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub patterns: Vec<Pattern>,
    pub selected_pattern: usize,
    min_speed: f32,
    max_speed: f32,
    speed_step: f32,
    random_density: f64,
    /// Last cell touched by the current paint stroke (None = not painting)
    stroke: Option<Point>,
}

impl GameState {
    /// Create a paused game around a starting board
    pub fn new(board: Board, simulation: &SimulationConfig) -> Self {
        Self {
            board,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: simulation.updates_per_second,
            patterns: presets::all_patterns(),
            selected_pattern: 0,
            min_speed: simulation.min_speed,
            max_speed: simulation.max_speed,
            speed_step: simulation.speed_step,
            random_density: simulation.random_density,
            stroke: None,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        self.board = self.board.next_board();
        self.generation += 1;
        self
    }

    /// Clear board, pause and reset generation counter
    pub fn reset(mut self) -> Self {
        self.board = self.board.clear();
        self.generation = 0;
        self.update_timer = 0.0;
        self.is_running = false;
        info!("board reset");
        self
    }

    /// Randomize board and reset generation counter
    pub fn randomize<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.board = self.board.randomize(rng, self.random_density);
        self.generation = 0;
        self.update_timer = 0.0;
        self.is_running = false;
        info!("board randomized, population {}", self.board.population());
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second =
            (self.updates_per_second + delta).clamp(self.min_speed, self.max_speed);
        self
    }

    pub fn speed_up(self) -> Self {
        let step = self.speed_step;
        self.adjust_speed(step)
    }

    pub fn slow_down(self) -> Self {
        let step = self.speed_step;
        self.adjust_speed(-step)
    }

    /// Select the next pattern for stamping
    pub fn cycle_pattern(mut self) -> Self {
        if !self.patterns.is_empty() {
            self.selected_pattern = (self.selected_pattern + 1) % self.patterns.len();
        }
        self
    }

    pub fn current_pattern(&self) -> Option<&Pattern> {
        self.patterns.get(self.selected_pattern)
    }

    /// Stamp the selected pattern centered on a cell
    pub fn stamp_pattern(mut self, center: Point) -> Self {
        if !self.board.contains(center) {
            debug!("ignoring stamp at {}: off the board", center);
            return self;
        }
        if let Some(pattern) = self.patterns.get(self.selected_pattern) {
            self.board = pattern.place_centered(&self.board, center);
        }
        self
    }

    /// Update simulation by one frame.
    /// Accumulates elapsed time and advances once the interval is reached.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step();
            self.update_timer = 0.0;
        }

        self
    }

    /// Start a paint stroke: toggles the cell under the cursor
    pub fn press_cell(&mut self, point: Point) {
        let Some(current) = self.board.get(point) else {
            debug!("ignoring press at {}: off the board", point);
            return;
        };
        if self.paint(point, current.toggle()) {
            self.stroke = Some(point);
        }
    }

    /// Continue a paint stroke: each newly entered cell becomes alive
    pub fn drag_cell(&mut self, point: Point) {
        match self.stroke {
            Some(last) if last != point => {
                if self.paint(point, Status::Alive) {
                    self.stroke = Some(point);
                }
            }
            _ => {}
        }
    }

    pub fn release_stroke(&mut self) {
        self.stroke = None;
    }

    pub const fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    fn paint(&mut self, point: Point, status: Status) -> bool {
        match self.board.set(point, status) {
            Ok(board) => {
                self.board = board;
                true
            }
            Err(err) => {
                debug!("ignoring paint: {}", err);
                false
            }
        }
    }
}
