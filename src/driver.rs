//! Backdrop lifecycle and frame ticking.
//!
//! A [`Driver`] owns one simulation end to end: it spawns the population
//! when the owning region appears, consumes resize and pointer events from
//! the host, runs step-then-draw on every frame tick, and goes quiet when
//! stopped. The host decides when ticks happen (normally one per display
//! refresh); the driver only reacts.
//!
//! All events and ticks arrive on one thread, so `&mut self` methods are
//! the entire concurrency story. A resize may land between two ticks and
//! swap out the whole particle population; the stepper and renderer only
//! ever walk the current population, so that is safe by construction.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::render::{self, Canvas};
use crate::state::SimState;
use crate::step;

/// Lifecycle phase of a [`Driver`].
///
/// Phases move strictly forward: `Uninitialized` until [`Driver::start`],
/// `Running` while ticking, `Stopped` forever after [`Driver::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Stopped,
}

/// Owns one backdrop simulation and its frame loop hooks.
pub struct Driver {
    config: EngineConfig,
    state: SimState,
    rng: SmallRng,
    phase: Phase,
}

impl Driver {
    /// A driver for the given variant, not yet started.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// A driver with a caller-chosen RNG seed, for reproducible runs.
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: SmallRng) -> Self {
        Self {
            config,
            state: SimState::new(),
            rng,
            phase: Phase::Uninitialized,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the driver currently steps and draws on tick.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Read access to the live simulation state.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The variant this driver runs.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Spawn the initial population for the given surface and begin
    /// accepting ticks. Does nothing unless the driver is fresh.
    pub fn start(&mut self, width: f32, height: f32) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.state.rebuild(&self.config, width, height, &mut self.rng);
        self.phase = Phase::Running;
    }

    /// Adopt a new surface size, discarding and respawning the population.
    /// Ignored unless running.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        if self.phase != Phase::Running {
            return;
        }
        self.state.rebuild(&self.config, width, height, &mut self.rng);
    }

    /// Record the pointer position in surface-local pixels. Takes effect on
    /// the next tick; no redraw happens here. Ignored unless running.
    pub fn handle_pointer(&mut self, position: Vec2) {
        if self.phase != Phase::Running {
            return;
        }
        self.state.pointer = position;
    }

    /// Run one frame: step the simulation, then draw it. Emits nothing at
    /// all unless the driver is running.
    pub fn tick(&mut self, canvas: &mut impl Canvas) {
        if self.phase != Phase::Running {
            return;
        }
        step::step(&mut self.state, &self.config);
        render::draw(&self.state, &self.config, canvas);
    }

    /// Stop forever. Idempotent, and safe to call before `start`; after
    /// this, no event or tick touches the state again.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }
}
