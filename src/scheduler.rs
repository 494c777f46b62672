use std::time::{Duration, Instant};

use crate::board::Simulation;

/// Time per generation at the slowest useful pace, before speed scaling.
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(500);

/// Speed scale the viewer starts at.
pub const DEFAULT_SPEED_SCALE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Wall-clock pacing for a [`Simulation`], driven by an external tick source.
///
/// The host calls [`Scheduler::tick`] once per frame with a non-decreasing
/// timestamp; at most one generation runs per tick.
#[derive(Debug, Clone)]
pub struct Scheduler {
    state: RunState,
    speed_scale: f32,
    base_interval: Duration,
    accumulated: Duration,
    last_tick: Instant,
}

impl Scheduler {
    /// A paused scheduler with the default interval and speed.
    pub fn new(now: Instant) -> Self {
        Self::with_interval(DEFAULT_BASE_INTERVAL, now)
    }

    pub fn with_interval(base_interval: Duration, now: Instant) -> Self {
        Self {
            state: RunState::Paused,
            speed_scale: DEFAULT_SPEED_SCALE,
            base_interval,
            accumulated: Duration::ZERO,
            last_tick: now,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    /// Progress made toward the next automatic generation.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Flip between paused and running. Partial progress is dropped.
    pub fn toggle(&mut self, now: Instant) {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        self.accumulated = Duration::ZERO;
        self.last_tick = now;
        log::info!("Simulation {:?}", self.state);
    }

    /// Clamped to `[0, 1]`; NaN leaves the current value in place.
    pub fn set_speed_scale(&mut self, value: f32) {
        if value.is_nan() {
            log::warn!("Ignoring NaN speed scale");
            return;
        }
        self.speed_scale = value.clamp(0.0, 1.0);
    }

    /// Time between generations at the current speed. Higher scale is faster.
    pub fn effective_interval(&self) -> Duration {
        self.base_interval.mul_f64(1.1 - f64::from(self.speed_scale))
    }

    /// Account for time since the last tick and run at most one generation.
    /// Returns whether a generation ran.
    pub fn tick<S: Simulation + ?Sized>(&mut self, now: Instant, sim: &mut S) -> bool {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.state != RunState::Running {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated >= self.effective_interval() {
            sim.next_generation();
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Run one generation regardless of state, leaving accumulated time alone.
    pub fn step_once<S: Simulation + ?Sized>(&self, sim: &mut S) {
        sim.next_generation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(u32);

    impl Simulation for Counter {
        fn next_generation(&mut self) {
            self.0 += 1;
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_paused() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        let mut sim = Counter::default();
        assert_eq!(scheduler.state(), RunState::Paused);
        assert!(!scheduler.tick(t0 + ms(10_000), &mut sim));
        assert_eq!(sim.0, 0);
        assert_eq!(scheduler.accumulated(), Duration::ZERO);
    }

    #[test]
    fn effective_interval_scales_with_speed() {
        let mut scheduler = Scheduler::new(Instant::now());
        scheduler.set_speed_scale(1.0);
        assert_eq!(scheduler.effective_interval(), ms(50));
        scheduler.set_speed_scale(0.0);
        assert_eq!(scheduler.effective_interval(), ms(550));
    }

    #[test]
    fn speed_scale_is_clamped() {
        let mut scheduler = Scheduler::new(Instant::now());
        scheduler.set_speed_scale(3.0);
        assert_eq!(scheduler.speed_scale(), 1.0);
        scheduler.set_speed_scale(-1.0);
        assert_eq!(scheduler.speed_scale(), 0.0);
        scheduler.set_speed_scale(f32::NAN);
        assert_eq!(scheduler.speed_scale(), 0.0);
    }

    #[test]
    fn fires_once_interval_is_reached() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        scheduler.set_speed_scale(0.1);
        scheduler.toggle(t0);
        let mut sim = Counter::default();

        assert!(!scheduler.tick(t0 + ms(200), &mut sim));
        assert_eq!(scheduler.accumulated(), ms(200));
        assert!(!scheduler.tick(t0 + ms(400), &mut sim));
        assert!(scheduler.tick(t0 + ms(500), &mut sim));
        assert_eq!(sim.0, 1);
        assert_eq!(scheduler.accumulated(), Duration::ZERO);
    }

    #[test]
    fn at_most_one_generation_per_tick() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        scheduler.toggle(t0);
        let mut sim = Counter::default();
        assert!(scheduler.tick(t0 + ms(60_000), &mut sim));
        assert_eq!(sim.0, 1);
    }

    #[test]
    fn speed_change_keeps_accumulated() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        scheduler.set_speed_scale(0.0);
        scheduler.toggle(t0);
        let mut sim = Counter::default();

        scheduler.tick(t0 + ms(100), &mut sim);
        scheduler.set_speed_scale(1.0);
        assert_eq!(scheduler.accumulated(), ms(100));
        assert_eq!(sim.0, 0);
        // 100ms already exceeds the 50ms fastest interval
        assert!(scheduler.tick(t0 + ms(100), &mut sim));
        assert_eq!(sim.0, 1);
    }

    #[test]
    fn pause_and_resume_drop_progress() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        scheduler.toggle(t0);
        let mut sim = Counter::default();

        scheduler.tick(t0 + ms(80), &mut sim);
        assert_eq!(scheduler.accumulated(), ms(80));
        scheduler.toggle(t0 + ms(90));
        assert_eq!(scheduler.state(), RunState::Paused);
        assert_eq!(scheduler.accumulated(), Duration::ZERO);
        scheduler.toggle(t0 + ms(5_000));
        assert!(scheduler.is_running());
        assert_eq!(scheduler.accumulated(), Duration::ZERO);

        // Time spent paused is not counted
        assert!(!scheduler.tick(t0 + ms(5_010), &mut sim));
        assert_eq!(scheduler.accumulated(), ms(10));
    }

    #[test]
    fn step_once_ignores_state_and_progress() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(t0);
        let mut sim = Counter::default();
        scheduler.step_once(&mut sim);
        assert_eq!(sim.0, 1);

        scheduler.toggle(t0);
        scheduler.tick(t0 + ms(30), &mut sim);
        scheduler.step_once(&mut sim);
        assert_eq!(sim.0, 2);
        assert_eq!(scheduler.accumulated(), ms(30));
    }
}
