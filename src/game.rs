use std::time::Instant;

use rand::Rng;

use crate::board::GameBoard;
use crate::config::LifeConfig;
use crate::error::Result;
use crate::scheduler::Scheduler;

/// A board and the scheduler pacing it, behind the command surface a UI drives.
#[derive(Debug, Clone)]
pub struct Game {
    board: GameBoard,
    scheduler: Scheduler,
    live_probability: f64,
}

impl Game {
    /// Build from `config`, seed the board and start running if configured.
    pub fn new(config: &LifeConfig, now: Instant) -> Result<Self> {
        Self::with_rng(config, now, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &LifeConfig, now: Instant, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut board = GameBoard::new(config.rows, config.cols, config.cell_pixel_size)?;
        match config.seed {
            Some(pattern) => {
                let (h, w) = pattern.extent();
                let row = config.rows.saturating_sub(h) / 2;
                let col = config.cols.saturating_sub(w) / 2;
                board.place_pattern(&pattern, row, col);
            }
            None => board.randomize_with(rng, config.live_probability),
        }

        let mut scheduler = Scheduler::with_interval(config.base_interval, now);
        scheduler.set_speed_scale(config.speed_scale);
        if config.start_running {
            scheduler.toggle(now);
        }

        Ok(Self {
            board,
            scheduler,
            live_probability: config.live_probability,
        })
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn generation(&self) -> u64 {
        self.board.generation()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn speed_scale(&self) -> f32 {
        self.scheduler.speed_scale()
    }

    /// Feed one frame's timestamp. Returns whether a generation ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.scheduler.tick(now, &mut self.board)
    }

    pub fn step_once(&mut self) {
        self.scheduler.step_once(&mut self.board);
    }

    pub fn toggle_run(&mut self, now: Instant) {
        self.scheduler.toggle(now);
    }

    pub fn set_speed_scale(&mut self, value: f32) {
        self.scheduler.set_speed_scale(value);
    }

    pub fn toggle_cell_at(&mut self, pixel_x: f32, pixel_y: f32) -> bool {
        self.board.toggle_cell_at(pixel_x, pixel_y)
    }

    pub fn clear(&mut self) {
        self.board.clear();
    }

    pub fn randomize(&mut self) {
        self.board.randomize_with(&mut rand::thread_rng(), self.live_probability);
    }

    pub fn resize(&mut self, rows: usize, cols: usize, cell_pixel_size: f32) -> Result<()> {
        self.board.resize(rows, cols, cell_pixel_size)
    }
}
