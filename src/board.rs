use rand::Rng;

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::rules::{GameRules, Pattern};
use crate::topology::NeighborTopology;

/// Fraction of cells that start alive after a randomize.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;

/// Anything that advances by whole generations.
pub trait Simulation {
    fn next_generation(&mut self);
}

/// A toroidal Game of Life board.
///
/// Cells are stored row-major; neighbor relationships are coordinates held
/// by the topology, never references between cells.
#[derive(Debug, Clone)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    cell_pixel_size: f32,
    grid: Vec<Cell>,
    topology: NeighborTopology,
    rules: GameRules,
    generation: u64,
}

fn check_dimensions(rows: usize, cols: usize, cell_pixel_size: f32) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(LifeError::InvalidDimensions { rows, cols });
    }
    if !cell_pixel_size.is_finite() || cell_pixel_size <= 0.0 {
        return Err(LifeError::InvalidCellSize(cell_pixel_size));
    }
    Ok(())
}

impl GameBoard {
    /// Build an empty board with Conway rules.
    pub fn new(rows: usize, cols: usize, cell_pixel_size: f32) -> Result<Self> {
        Self::with_rules(rows, cols, cell_pixel_size, GameRules::conway())
    }

    pub fn with_rules(rows: usize, cols: usize, cell_pixel_size: f32, rules: GameRules) -> Result<Self> {
        check_dimensions(rows, cols, cell_pixel_size)?;
        let mut board = Self {
            rows,
            cols,
            cell_pixel_size,
            grid: Vec::new(),
            topology: NeighborTopology::default(),
            rules,
            generation: 0,
        };
        board.init_grid();
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_pixel_size(&self) -> f32 {
        self.cell_pixel_size
    }

    /// Width and height of the whole board in pixels.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_pixel_size,
            self.rows as f32 * self.cell_pixel_size,
        )
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn topology(&self) -> &NeighborTopology {
        &self.topology
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.grid.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            self.grid.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    pub fn population(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fresh grid of dead cells, fresh topology, generation zero.
    pub fn init_grid(&mut self) {
        self.grid = vec![Cell::new(); self.rows * self.cols];
        self.topology.rebuild(self.rows, self.cols);
        self.generation = 0;
        log::info!("Initialized {}x{} grid", self.rows, self.cols);
    }

    pub fn clear(&mut self) {
        self.init_grid();
    }

    /// Randomize with the default live probability using the thread RNG.
    pub fn randomize_cell_states(&mut self) {
        self.randomize_with(&mut rand::thread_rng(), DEFAULT_LIVE_PROBABILITY);
    }

    /// Reset every cell, then bring each to life with `live_probability`.
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, live_probability: f64) {
        let p = if live_probability.is_nan() { 0.0 } else { live_probability.clamp(0.0, 1.0) };
        for cell in &mut self.grid {
            cell.reset();
            cell.set(rng.gen_bool(p));
        }
        self.generation = 0;
        log::info!("Randomized grid: {} live cells", self.population());
    }

    /// Map a pixel position to `(row, col)`, if it lands on the board.
    pub fn cell_coord_at(&self, pixel_x: f32, pixel_y: f32) -> Option<(usize, usize)> {
        let col = (pixel_x / self.cell_pixel_size).floor();
        let row = (pixel_y / self.cell_pixel_size).floor();
        // NaN fails every comparison and is rejected here too
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn get_cell(&self, pixel_x: f32, pixel_y: f32) -> Option<&Cell> {
        let (row, col) = self.cell_coord_at(pixel_x, pixel_y)?;
        self.cell(row, col)
    }

    /// Flip the cell under the pixel and reset its age. Returns whether a cell was hit.
    pub fn toggle_cell_at(&mut self, pixel_x: f32, pixel_y: f32) -> bool {
        let Some((row, col)) = self.cell_coord_at(pixel_x, pixel_y) else {
            return false;
        };
        match self.cell_mut(row, col) {
            Some(cell) => {
                let alive = !cell.is_alive();
                cell.set(alive);
                log::debug!("Toggled cell ({row}, {col}) -> {alive}");
                true
            }
            None => false,
        }
    }

    /// Bring the pattern's cells to life with its anchor at `(row, col)`, wrapping at the edges.
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) {
        for &(dr, dc) in pattern.offsets() {
            let r = (row + dr) % self.rows;
            let c = (col + dc) % self.cols;
            if let Some(cell) = self.cell_mut(r, c) {
                cell.set(true);
            }
        }
    }

    pub fn live_neighbors(&self, row: usize, col: usize) -> u32 {
        self.topology
            .neighbors(row, col)
            .iter()
            .filter(|&&(r, c)| self.grid[r * self.cols + c].is_alive())
            .count() as u32
    }

    /// Advance one generation: stage every cell from the current snapshot, then commit all.
    pub fn next_generation(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self.live_neighbors(row, col);
                let idx = row * self.cols + col;
                let cell = &self.grid[idx];
                if let Some(transition) = self.rules.transition(cell.is_alive(), cell.age(), count) {
                    self.grid[idx].stage(transition);
                }
            }
        }

        for cell in &mut self.grid {
            cell.commit();
        }

        self.generation += 1;
        log::debug!("Generation {}: {} live cells", self.generation, self.population());
    }

    /// Discard the grid and rebuild it at the new dimensions.
    pub fn resize(&mut self, rows: usize, cols: usize, cell_pixel_size: f32) -> Result<()> {
        check_dimensions(rows, cols, cell_pixel_size)?;
        self.rows = rows;
        self.cols = cols;
        self.cell_pixel_size = cell_pixel_size;
        self.init_grid();
        log::info!("Resized board to {}x{} at {} px per cell", rows, cols, cell_pixel_size);
        Ok(())
    }
}

impl Simulation for GameBoard {
    fn next_generation(&mut self) {
        GameBoard::next_generation(self);
    }
}
