use std::str::FromStr;
use std::time::Duration;

use crate::board::DEFAULT_LIVE_PROBABILITY;
use crate::error::{LifeError, Result};
use crate::rules::Pattern;
use crate::scheduler::{DEFAULT_BASE_INTERVAL, DEFAULT_SPEED_SCALE};

// A 50x30 board drawn at 12px per cell
pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_CELL_SIZE: f32 = 12.0;

/// Everything needed to stand up a [`crate::Game`].
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_pixel_size: f32,
    pub base_interval: Duration,
    pub speed_scale: f32,
    pub live_probability: f64,
    /// Start the scheduler in the running state.
    pub start_running: bool,
    /// Seed with this pattern instead of random noise.
    pub seed: Option<Pattern>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_pixel_size: DEFAULT_CELL_SIZE,
            base_interval: DEFAULT_BASE_INTERVAL,
            speed_scale: DEFAULT_SPEED_SCALE,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            start_running: true,
            seed: None,
        }
    }
}

fn env_override<T: FromStr>(key: &str, target: &mut T) {
    let Ok(raw) = std::env::var(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => log::warn!("Ignoring unparsable {key}={raw:?}"),
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_ROWS`, `LIFE_COLS`, `LIFE_CELL_SIZE` and `LIFE_SPEED`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        env_override("LIFE_ROWS", &mut config.rows);
        env_override("LIFE_COLS", &mut config.cols);
        env_override("LIFE_CELL_SIZE", &mut config.cell_pixel_size);
        env_override("LIFE_SPEED", &mut config.speed_scale);
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }
        if !self.cell_pixel_size.is_finite() || self.cell_pixel_size <= 0.0 {
            return Err(LifeError::InvalidCellSize(self.cell_pixel_size));
        }
        if !(0.0..=1.0).contains(&self.speed_scale) {
            return Err(LifeError::InvalidSpeedScale(self.speed_scale));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(LifeError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }
}
