use crate::domain::Point;

/// Viewport maps between screen pixels and board cells.
/// The board is scaled to fit the grid area and centered in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32, // Square cells, whole pixels
}

impl Viewport {
    /// Fit a `rows` x `cols` board into the given area
    pub fn fit(area_width: f32, area_height: f32, rows: usize, cols: usize) -> Self {
        let rows = rows.max(1) as f32;
        let cols = cols.max(1) as f32;
        let cell_size = (area_width / cols).min(area_height / rows).max(1.0).floor();

        Self {
            origin_x: ((area_width - cell_size * cols) / 2.0).max(0.0),
            origin_y: ((area_height - cell_size * rows) / 2.0).max(0.0),
            cell_size,
        }
    }

    /// Convert screen coordinates to a board point.
    /// Positions left of or above the board give negative coordinates.
    pub fn screen_to_point(&self, screen_x: f32, screen_y: f32) -> Point {
        let col = ((screen_x - self.origin_x) / self.cell_size).floor() as i32;
        let row = ((screen_y - self.origin_y) / self.cell_size).floor() as i32;
        Point::new(row, col)
    }

    /// Top-left screen corner of a cell
    pub fn point_to_screen(&self, point: Point) -> (f32, f32) {
        let screen_x = point.col as f32 * self.cell_size + self.origin_x;
        let screen_y = point.row as f32 * self.cell_size + self.origin_y;
        (screen_x, screen_y)
    }
}
