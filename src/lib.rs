//! Conway's Game of Life on a toroidal grid, paced by a wall-clock scheduler.
//!
//! The board stages every cell's next state from one snapshot before
//! committing any of them. The scheduler is driven by whatever tick source
//! the host has (a render loop, a timer) and runs at most one generation per
//! tick.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod scheduler;
pub mod topology;

pub use board::{GameBoard, Simulation, DEFAULT_LIVE_PROBABILITY};
pub use cell::{Cell, Shade, Transition, MATURE_AGE};
pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use game::Game;
pub use rules::{GameRules, Pattern};
pub use scheduler::{RunState, Scheduler};
pub use topology::{Coord, NeighborTopology};
