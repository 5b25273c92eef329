//! The particle model.

use glam::Vec2;

use crate::visuals::Rgba;

/// A single simulated point.
///
/// Position and velocity are in surface pixels and pixels per frame.
/// Radius and color are fixed at spawn and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in surface-local pixels.
    pub position: Vec2,
    /// Drift velocity in pixels per frame.
    pub velocity: Vec2,
    /// Disk radius in pixels.
    pub radius: f32,
    /// Fill color, including alpha.
    pub color: Rgba,
}
