//! Live simulation state for one backdrop.

use glam::Vec2;
use rand::rngs::SmallRng;

use crate::config::EngineConfig;
use crate::particle::Particle;
use crate::spawn;

/// Pointer position before any pointer event has been observed.
///
/// Far enough outside any real surface that neither repulsion nor pointer
/// links can trigger until the pointer actually moves.
pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Everything a backdrop simulation knows between frames: the particle
/// population, the last observed pointer position, and the current surface
/// size. One instance per backdrop; instances never share state.
#[derive(Debug, Clone)]
pub struct SimState {
    /// The live particle population.
    pub particles: Vec<Particle>,
    /// Last observed pointer position in surface-local pixels.
    pub pointer: Vec2,
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
}

impl SimState {
    /// An empty state with no particles and the pointer offscreen.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            pointer: OFFSCREEN,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Adopt a new surface size and respawn the whole population.
    ///
    /// Old particles are discarded, not resized in place; continuity across
    /// a resize is explicitly not a goal of this engine.
    pub fn rebuild(&mut self, cfg: &EngineConfig, width: f32, height: f32, rng: &mut SmallRng) {
        self.width = width;
        self.height = height;
        self.particles = spawn::spawn(cfg, width, height, rng);
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
