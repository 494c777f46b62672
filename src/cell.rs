/// A staged, not yet applied update for one cell.
///
/// Only the fields that are `Some` are written on commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    pub alive: Option<bool>,
    pub age: Option<u32>,
}

impl Transition {
    /// Death by under- or overpopulation.
    pub fn die() -> Self {
        Self { alive: Some(false), age: Some(0) }
    }

    /// A dead cell coming to life.
    pub fn birth() -> Self {
        Self { alive: Some(true), age: Some(0) }
    }

    /// A live cell surviving one more generation.
    pub fn survive(age: u32) -> Self {
        Self { alive: None, age: Some(age) }
    }
}

/// Visual classification handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Dead,
    Young,
    Mature,
}

/// Age above which a live cell counts as mature.
pub const MATURE_AGE: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    age: u32,
    pending: Option<Transition>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn pending(&self) -> Option<Transition> {
        self.pending
    }

    pub fn shade(&self) -> Shade {
        match (self.alive, self.age > MATURE_AGE) {
            (false, _) => Shade::Dead,
            (true, false) => Shade::Young,
            (true, true) => Shade::Mature,
        }
    }

    pub fn reset(&mut self) {
        self.alive = false;
        self.age = 0;
        self.pending = None;
    }

    /// Direct edit that bypasses staging; used for user toggles and seeding.
    pub fn set(&mut self, alive: bool) {
        self.alive = alive;
        self.age = 0;
    }

    /// Record a transition without touching visible state. Last write wins.
    pub fn stage(&mut self, transition: Transition) {
        self.pending = Some(transition);
    }

    /// Apply and clear the pending transition, if any.
    pub fn commit(&mut self) {
        let Some(transition) = self.pending.take() else {
            return;
        };
        if let Some(alive) = transition.alive {
            self.alive = alive;
        }
        if let Some(age) = transition.age {
            self.age = age;
        }
        if !self.alive {
            self.age = 0;
        }
    }
}
